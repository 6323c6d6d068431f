use skyline_atlas::{PackerConfig, PackerError};

#[test]
fn rejects_non_power_of_two_dimensions() {
    let cfg = PackerConfig::builder().min_dimension(17).build();
    assert!(matches!(cfg.validate(), Err(PackerError::InvalidArguments(_))));
}

#[test]
fn rejects_max_not_greater_than_min() {
    let cfg = PackerConfig::builder().min_dimension(64).max_dimension(64).build();
    assert!(matches!(cfg.validate(), Err(PackerError::InvalidArguments(_))));
}

#[test]
fn rejects_zero_shelf_or_waste_bounds() {
    let cfg = PackerConfig::builder().max_shelves(0).build();
    assert!(cfg.validate().is_err());

    let cfg = PackerConfig::builder().max_wasted_rects(0).build();
    assert!(cfg.validate().is_err());
}

#[test]
fn defaults_are_valid() {
    assert!(PackerConfig::default().validate().is_ok());
}

#[test]
fn builder_overrides_apply() {
    let cfg = PackerConfig::builder()
        .min_dimension(32)
        .max_dimension(1024)
        .max_shelves(16)
        .max_wasted_rects(64)
        .build();
    assert_eq!(cfg.min_dimension, 32);
    assert_eq!(cfg.max_dimension, 1024);
    assert_eq!(cfg.max_shelves, 16);
    assert_eq!(cfg.max_wasted_rects, 64);
    assert!(cfg.validate().is_ok());
}
