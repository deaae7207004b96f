use bootmanifest::config::sdk::SdkConfig;

#[path = "common/mod.rs"]
mod common;

#[test]
fn genx_marker_switches_secure_boot() {
    let path = common::write_config_file("sdk_genx", "CONFIG_GENX_ENABLE=y\n");
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.secure_boot, "genx");
}

#[test]
fn secure_boot_defaults_to_gen2() {
    let path = common::write_config_file("sdk_empty", "# CONFIG_GENX_ENABLE is not set\n");
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.secure_boot, "gen2");
}

#[test]
fn chip_markers_map_to_chip_types() {
    let cases = [
        ("CONFIG_BERLIN_DOLPHIN_A0=y", "sl1680"),
        ("CONFIG_BERLIN_PLATYPUS_A0=y", "sl1640"),
        ("CONFIG_BERLIN_MYNA2_A0=y", "sl1620"),
    ];
    for (marker, chip) in cases {
        let path = common::write_config_file(&format!("sdk_chip_{}", chip), marker);
        let config = SdkConfig::from_file(&path);
        assert_eq!(config.chip.as_deref(), Some(chip));
    }
}

#[test]
fn chip_absent_without_marker() {
    let path = common::write_config_file("sdk_no_chip", "CONFIG_GENX_ENABLE=y\n");
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.chip, None);
}

#[test]
fn first_chip_marker_wins() {
    let path = common::write_config_file(
        "sdk_two_chips",
        "CONFIG_BERLIN_PLATYPUS_A0=y\nCONFIG_BERLIN_DOLPHIN_A0=y\n",
    );
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.chip.as_deref(), Some("sl1640"));
}

#[test]
fn board_requires_rdk_in_value() {
    let path = common::write_config_file("sdk_rdk", "CONFIG_BOARD_NAME=\"SL1680_RDK\"\n");
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.board.as_deref(), Some("rdk"));

    let path = common::write_config_file("sdk_evk", "CONFIG_BOARD_NAME=\"SL1680_EVK\"\n");
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.board, None);
}

#[test]
fn suboot_marker_switches_variant() {
    let path = common::write_config_file("sdk_suboot", "CONFIG_UBOOT_SUBOOT=y\n");
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.uboot, "suboot");

    let path = common::write_config_file("sdk_uboot", "CONFIG_OTHER=y\n");
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.uboot, "uboot");
}

#[test]
fn memory_size_is_extracted_and_lowercased() {
    let path = common::write_config_file("sdk_mem", "CONFIG_PREBOOT_MEMORY_SIZE=\"4GB\"\n");
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.memory_layout.as_deref(), Some("4gb"));
}

#[test]
fn boolean_marker_shadows_memory_size_on_same_line() {
    let path = common::write_config_file(
        "sdk_mem_shadowed",
        "CONFIG_UBOOT_SUBOOT=y CONFIG_PREBOOT_MEMORY_SIZE=\"4GB\"\n",
    );
    let config = SdkConfig::from_file(&path);
    assert_eq!(config.uboot, "suboot");
    assert_eq!(config.memory_layout, None);
}

#[test]
fn missing_file_yields_defaults() {
    let config = SdkConfig::from_file("out/definitely-missing.config");
    assert_eq!(config, SdkConfig::default());
}
