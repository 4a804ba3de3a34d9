use cligen_core::model::ApiSpec;
use serde_json::json;

/// Emit `package.json` for the generated program.
///
/// `engines.node` carries the minimum runtime version, `bin` the entry point,
/// and `exports` maps the package namespace onto the same script.
pub fn emit_manifest(
    spec: &ApiSpec,
    program: &str,
    runtime_version: &str,
) -> Result<String, serde_json::Error> {
    let entry = format!("./{program}");
    let manifest = json!({
        "name": program,
        "version": "0.1.0",
        "description": format!("Command-line client for {}", spec.name),
        "type": "commonjs",
        "engines": { "node": runtime_version },
        "bin": { program: entry },
        "exports": { ".": entry },
        "files": [program, "README.md"],
    });

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_fields() {
        let spec = ApiSpec {
            name: "Example \"Quoted\" API".to_string(),
            base_url: "https://api.example.com".to_string(),
            routes: vec![],
            auth: None,
        };
        let out = emit_manifest(&spec, "example-cli", ">=20").unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(manifest["name"], "example-cli");
        assert_eq!(manifest["description"], "Command-line client for Example \"Quoted\" API");
        assert_eq!(manifest["engines"]["node"], ">=20");
        assert_eq!(manifest["bin"]["example-cli"], "./example-cli");
        assert_eq!(manifest["exports"]["."], "./example-cli");
        assert!(out.ends_with("}\n"));
    }
}
