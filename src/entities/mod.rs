// Clients store
pub mod buyer;
pub mod supplier;

// Samples store: style catalog
pub mod required_material;
pub mod style_summary;
pub mod style_variant;
pub mod variant_color_part;

// Samples store: sample lifecycle and timing
pub mod sample;
pub mod sample_operation;
pub mod smv_calculation;

// Samples store: planning snapshots
pub mod sample_plan;
pub mod sample_tna;

// Samples store: master data
pub mod garment_color;
pub mod garment_size;
pub mod operation_master;
pub mod operation_type;
pub mod smv_settings;
