//! Form catalog
//!
//! The five data-entry forms of the admin area, their option lists and the
//! user-facing messages (Spanish locale).

use super::notify::Notification;
use super::records::FormKind;
use super::schema::{FieldDefault, FieldSpec, Refinement, Schema};

// ============================================================================
// Messages
// ============================================================================

pub const NON_NEGATIVE: &str = "Debe ser un valor positivo";
pub const NUMBER_REQUIRED: &str = "El valor es requerido";
pub const API_GRAVITY_RANGE: &str = "°API debe estar entre 0 y 100";
pub const WATER_SEDIMENT_RANGE: &str = "% AyS debe estar entre 0 y 100";

pub const DATE_REQUIRED: &str = "La fecha es requerida";
pub const START_DATE_REQUIRED: &str = "La fecha de inicio es requerida";
pub const END_DATE_REQUIRED: &str = "La fecha de fin es requerida";
pub const DATE_ORDER: &str = "La fecha de fin debe ser posterior a la fecha de inicio";

pub const FIELD_REQUIRED: &str = "Seleccione un campo";
pub const AREA_REQUIRED: &str = "El área es requerida";
pub const STATION_REQUIRED: &str = "Seleccione una estación";
pub const FIELD_NAME_REQUIRED: &str = "El campo es requerido";
pub const WELL_NAME_REQUIRED: &str = "El nombre del pozo es requerido";
pub const WELL_NUMBER_REQUIRED: &str = "El número del pozo es requerido";
pub const CATEGORY_REQUIRED: &str = "Seleccione una categoría";
pub const STATUS_REQUIRED: &str = "Seleccione un estado";

pub const INVALID_DATE: &str = "Fecha inválida";
pub const INVALID_NUMBER: &str = "Debe ser un número";
pub const INVALID_TEXT: &str = "Debe ser un texto";
pub const INVALID_CHOICE: &str = "Opción inválida";

pub const SAVED_TITLE: &str = "Datos guardados";

// ============================================================================
// Option lists
// ============================================================================

pub const FIELDS: &[&str] = &[
    "Campo Norte",
    "Campo Sur",
    "Campo Este",
    "Campo Oeste",
    "Campo Central",
];

pub const STATIONS: &[&str] = &[
    "Estación Norte",
    "Estación Sur",
    "Estación Este",
    "Estación Oeste",
    "Estación Central",
];

pub const WELL_CATEGORIES: &[&str] = &[
    "Categoría 1: Pozos activos",
    "Categoría 2: Pozos inactivos con daños menores",
    "Categoría 3: Pozos inactivos con daños mayores",
    "Categoría 4: Por definir",
    "Categoría 5: Por definir",
];

pub const WELL_STATUSES: &[&str] = &[
    "Activo",
    "Inactivo - Mantenimiento",
    "Inactivo - Daño menor",
    "Inactivo - Daño mayor",
    "En reparación",
    "Fuera de servicio",
];

// ============================================================================
// Schemas
// ============================================================================

fn non_negative(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::number(name, label).min(0.0, NON_NEGATIVE)
}

fn percentage(name: &'static str, label: &'static str, message: &'static str) -> FieldSpec {
    FieldSpec::number(name, label)
        .step(0.1)
        .min(0.0, message)
        .max(100.0, message)
}

/// Schema of `kind`
pub fn schema(kind: FormKind) -> Schema {
    match kind {
        FormKind::Production => production(),
        FormKind::Field => field(),
        FormKind::Station => station(),
        FormKind::WellStatus => well_status(),
        FormKind::Historical => historical(),
    }
}

/// Every schema, in admin display order
pub fn schemas() -> Vec<Schema> {
    FormKind::all().iter().map(|kind| schema(*kind)).collect()
}

fn production() -> Schema {
    Schema::new(FormKind::Production, "Carga de Producción Diaria")
        .field(FieldSpec::date("date", "Fecha", DATE_REQUIRED))
        .field(non_negative("crude_production", "Producción de Crudo (bbl)"))
        .field(non_negative("injection", "Inyección (bbl)"))
        .field(non_negative("mechanical_pumping", "Bombeo Mecánico (bbl)"))
        .field(non_negative("electric_pumping", "Bombeo Electrosumergible (bbl)"))
        .field(non_negative("gas_pumping", "Bombeo por Gas (bbl)"))
        .field(non_negative("diluent_received", "Diluente Recibido (bbl)"))
        .field(non_negative("diluent_consumed", "Diluente Consumido (bbl)"))
        .field(percentage("api_gravity", "°API", API_GRAVITY_RANGE))
        .field(percentage("water_and_sediments", "% AyS", WATER_SEDIMENT_RANGE))
}

fn field() -> Schema {
    Schema::new(FormKind::Field, "Datos por Campo")
        .field(FieldSpec::date("date", "Fecha", DATE_REQUIRED))
        .field(FieldSpec::choice("field", "Campo", FIELDS, FIELD_REQUIRED))
        .field(FieldSpec::text("area", "Área", AREA_REQUIRED))
        .field(non_negative("crude_production", "Producción de Crudo (bbl)"))
        .field(non_negative("mechanical_pumping", "Bombeo Mecánico (bbl)"))
        .field(non_negative("electric_pumping", "Bombeo Electrosumergible (bbl)"))
        .field(non_negative("gas_pumping", "Bombeo por Gas (bbl)"))
        .field(non_negative("injection", "Inyección (bbl)"))
}

fn station() -> Schema {
    Schema::new(FormKind::Station, "Datos por Estación/Campo")
        .field(FieldSpec::date("date", "Fecha", DATE_REQUIRED))
        .field(FieldSpec::choice("station", "Estación", STATIONS, STATION_REQUIRED))
        .field(FieldSpec::text("field", "Campo", FIELD_NAME_REQUIRED))
        .field(non_negative("crude_production", "Producción de Crudo (bbl)"))
        .field(non_negative("mechanical_pumping", "Bombeo Mecánico (bbl)"))
        .field(non_negative("electric_pumping", "Bombeo Electrosumergible (bbl)"))
        .field(non_negative("gas_pumping", "Bombeo por Gas (bbl)"))
        .field(non_negative("injection", "Inyección (bbl)"))
}

fn well_status() -> Schema {
    Schema::new(FormKind::WellStatus, "Estado de Pozos por Categoría")
        .field(FieldSpec::date("date", "Fecha", DATE_REQUIRED))
        .field(FieldSpec::text("well_name", "Nombre del Pozo", WELL_NAME_REQUIRED))
        .field(FieldSpec::text("well_number", "Número del Pozo", WELL_NUMBER_REQUIRED))
        .field(FieldSpec::choice(
            "category",
            "Categoría",
            WELL_CATEGORIES,
            CATEGORY_REQUIRED,
        ))
        .field(FieldSpec::choice("status", "Estado", WELL_STATUSES, STATUS_REQUIRED))
        .field(non_negative("production", "Producción (bbl/día)").optional())
        .field(FieldSpec::date("last_maintenance", "Último Mantenimiento", DATE_REQUIRED).optional())
        .field(FieldSpec::date("next_maintenance", "Próximo Mantenimiento", DATE_REQUIRED).optional())
        .field(
            FieldSpec::text("observations", "Observaciones", INVALID_TEXT)
                .optional()
                .default_to(FieldDefault::Empty),
        )
}

fn historical() -> Schema {
    Schema::new(FormKind::Historical, "Carga de Datos Históricos")
        .field(FieldSpec::date("start_date", "Fecha de Inicio", START_DATE_REQUIRED))
        .field(FieldSpec::date("end_date", "Fecha de Fin", END_DATE_REQUIRED))
        .field(non_negative("daily_production", "Producción Diaria Promedio (bbl)"))
        .field(non_negative("daily_injection", "Inyección Diaria Promedio (bbl)"))
        .field(non_negative("daily_pumping", "Bombeo Diario Promedio (bbl)"))
        .field(non_negative("diluent_consumption", "Consumo de Diluente Promedio (bbl)"))
        .refine(Refinement::NotBefore {
            earlier: "start_date",
            later: "end_date",
            message: DATE_ORDER,
        })
}

// ============================================================================
// Notifications
// ============================================================================

/// Notification emitted after a successful submission of `kind`
pub fn success_notification(kind: FormKind) -> Notification {
    let description = match kind {
        FormKind::Production => "Los datos de producción han sido registrados exitosamente",
        FormKind::Field => "Los datos del campo han sido registrados exitosamente",
        FormKind::Station => "Los datos de la estación han sido registrados exitosamente",
        FormKind::WellStatus => "El estado del pozo ha sido actualizado exitosamente",
        FormKind::Historical => "Los datos históricos han sido registrados exitosamente",
    };
    Notification::success(SAVED_TITLE, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema::FieldKind;

    #[test]
    fn test_every_form_has_schema() {
        let all = schemas();
        assert_eq!(all.len(), 5);
        for (schema, kind) in all.iter().zip(FormKind::all()) {
            assert_eq!(schema.kind, *kind);
            assert!(!schema.fields.is_empty());
        }
    }

    #[test]
    fn test_production_percentages_step() {
        let schema = schema(FormKind::Production);
        for name in ["api_gravity", "water_and_sediments"] {
            let spec = schema.get(name).unwrap();
            assert_eq!(spec.kind, FieldKind::Number { step: 0.1 });
            assert_eq!(spec.max.unwrap().value, 100.0);
        }
    }

    #[test]
    fn test_only_historical_has_refinement() {
        for kind in FormKind::all() {
            let expected = usize::from(*kind == FormKind::Historical);
            assert_eq!(schema(*kind).refinements.len(), expected);
        }
    }

    #[test]
    fn test_success_notifications() {
        for kind in FormKind::all() {
            let n = success_notification(*kind);
            assert_eq!(n.title, SAVED_TITLE);
            assert!(n.description.ends_with("exitosamente"));
        }
        assert_eq!(
            success_notification(FormKind::WellStatus).description,
            "El estado del pozo ha sido actualizado exitosamente"
        );
    }
}
