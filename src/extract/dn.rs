//! Distinguished-name component parsing
//!
//! Splits a DN string ("CN=web01.example.com, O=Example Inc, C=GB") into the
//! components the report cares about. Values are taken as declared; no
//! attempt is made at full RFC 4514 unescaping.

/// Components extracted from a distinguished-name string
#[derive(Debug, Clone, Default)]
pub struct DnComponents {
    pub common_name: Option<String>,
    pub country: Option<String>,
    pub organization: Option<String>,
    pub organizational_unit: Option<String>,
    pub locality: Option<String>,
    pub state: Option<String>,
}

impl DnComponents {
    /// CN, or the raw DN string when no CN component is present
    pub fn name_or_raw(&self, raw: &str) -> String {
        self.common_name
            .clone()
            .unwrap_or_else(|| raw.to_string())
    }
}

/// Parse a DN string into its components.
///
/// Components are split on `,` then `=`, both sides trimmed. The first
/// occurrence of each key wins. `ST` is accepted alongside `S` for the
/// state/province component.
pub fn parse_dn(raw: &str) -> DnComponents {
    let mut components = DnComponents::default();

    for part in raw.split(',') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_uppercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let slot = match key.as_str() {
            "CN" => &mut components.common_name,
            "C" => &mut components.country,
            "O" => &mut components.organization,
            "OU" => &mut components.organizational_unit,
            "L" => &mut components.locality,
            "S" | "ST" => &mut components.state,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    components
}
