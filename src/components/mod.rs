pub mod prediction_form;
pub mod result_panel;
