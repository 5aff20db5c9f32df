pub mod filter_toolbar;
