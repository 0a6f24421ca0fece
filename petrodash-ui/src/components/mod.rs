//! UI Components
//!
//! Reusable Leptos components for the dashboard and admin pages.

pub mod bar_chart;
pub mod chart;
pub mod form_panel;
pub mod kpi_card;
pub mod nav;
pub mod toast;
pub mod upload;

pub use bar_chart::BarChart;
pub use chart::HistoryChart;
pub use form_panel::FormPanel;
pub use kpi_card::KpiCard;
pub use nav::{Nav, TabBar};
pub use toast::Toast;
pub use upload::FileUpload;
