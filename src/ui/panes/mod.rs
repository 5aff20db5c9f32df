pub mod detail_pane;
