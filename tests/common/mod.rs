#![allow(dead_code)]

use std::fs;
use std::path::Path;

use bootmanifest::args::{Args, InputArgs};
use bootmanifest::manifest::args::FieldArgs;
use bootmanifest::output::args::OutputArgs;

pub fn ensure_out_dir() {
    fs::create_dir_all("out").unwrap();
}

pub fn write_config_file(file_stem: &str, contents: &str) -> String {
    ensure_out_dir();
    let path = format!("out/{}.config", file_stem);
    fs::write(&path, contents).expect("write config file");
    path
}

pub fn base_fields() -> FieldArgs {
    FieldArgs {
        chip: None,
        board: None,
        secure_boot: None,
        vendor_id: "06CB".to_string(),
        product_id: None,
        console: None,
        uenv_support: None,
        memory_layout: None,
        uboot: None,
        uboot_version: String::new(),
    }
}

pub fn build_args(fields: FieldArgs, inputs: InputArgs, out_stem: &str) -> Args {
    ensure_out_dir();
    Args {
        fields,
        inputs,
        output: OutputArgs {
            output: format!("out/{}.yaml", out_stem),
        },
    }
}

pub fn read_manifest(args: &Args) -> String {
    fs::read_to_string(&args.output.output).expect("read manifest")
}

pub fn manifest_value<'a>(doc: &'a str, key: &str) -> Option<&'a str> {
    let prefix = format!("{}: ", key);
    doc.lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
}

pub fn assert_no_manifest(args: &Args) {
    assert!(!Path::new(&args.output.output).exists());
}
