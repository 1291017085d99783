pub mod materials_panel;
pub mod parameters_panel;
pub mod results_table;

pub use materials_panel::MaterialsPanel;
pub use parameters_panel::ParametersPanel;
pub use results_table::ResultsTable;
