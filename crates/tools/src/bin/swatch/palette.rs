use std::path::Path;

use anyhow::Context;
use image::Rgb;
use luma::Color;
use serde::Deserialize;

const NICE_COLORS: [u32; 50] = [ // RRGGBB
    0xFF6633, 0xFFB399, 0xFF33FF, 0xFFFF99, 0x00B3E6,
    0xE6B333, 0x3366E6, 0x999966, 0x99FF99, 0xB34D4D,
    0x80B300, 0x809900, 0xE6B3B3, 0x6680B3, 0x66991A,
    0xFF99E6, 0xCCFF1A, 0xFF1A66, 0xE6331A, 0x33FFCC,
    0x66994D, 0xB366CC, 0x4D8000, 0xB33300, 0xCC80CC,
    0x66664D, 0x991AFF, 0xE666FF, 0x4DB3FF, 0x1AB399,
    0xE666B3, 0x33991A, 0xCC9999, 0xB3B31A, 0x00E680,
    0x4D8066, 0x809980, 0xE6FF80, 0x1AFF33, 0x999933,
    0xFF3380, 0xCCCC00, 0x66E64D, 0x4D80CC, 0x9900B3,
    0xE64D66, 0x4DB380, 0xFF4D4D, 0x99E6E6, 0x6666FF,
];

#[derive(Deserialize, Debug)]
struct PaletteEntry {
    name: String,
    color: String,
}

pub(crate) fn builtin() -> Vec<(String, Color)> {
    NICE_COLORS
        .iter()
        .enumerate()
        .map(|(n, rgb)| {
            let [_, r, g, b] = rgb.to_be_bytes();
            (format!("nice-{n}"), Color::from(Rgb([r, g, b])))
        })
        .collect()
}

pub(crate) fn parse(yaml: &str) -> anyhow::Result<Vec<(String, Color)>> {
    let entries: Vec<PaletteEntry> = serde_yaml::from_str(yaml)
        .context("palette is not a list of name/color entries")?;

    entries
        .into_iter()
        .map(|entry| {
            let color = entry.color.parse::<Color>()
                .with_context(|| format!("color of '{}'", entry.name))?;
            Ok((entry.name, color))
        })
        .collect()
}

pub(crate) fn load(path: impl AsRef<Path>) -> anyhow::Result<Vec<(String, Color)>> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse(&yaml).with_context(|| format!("parsing {}", path.display()))
}
