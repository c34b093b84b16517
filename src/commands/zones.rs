use crate::core::LczType;
use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

/// Table of every zone with the name `--lcz` accepts.
pub fn zones_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["CLI name", "Zone"]);
    for lcz in LczType::ALL {
        table.add_row(vec![lcz.cli_name(), lcz.label()]);
    }
    table
}

pub fn list_zones() -> Result<()> {
    println!("{}", zones_table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_zone() {
        let rendered = zones_table().to_string();
        for lcz in LczType::ALL {
            assert!(rendered.contains(&lcz.label()));
            assert!(rendered.contains(&lcz.cli_name()));
        }
    }
}
