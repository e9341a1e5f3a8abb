use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Supports an optional default value via `{{ env.VAR | default("fallback") }}`.
/// When a default is provided and the variable is unset, the default is used
/// instead of returning an error. Lines starting with `#` (TOML comments) are
/// passed through unchanged.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Group 1: the key (e.g. `env.VAR_NAME`)
        // Group 2: optional default value inside default("...")
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;

        for captures in re().captures_iter(line) {
            let (Some(overall), Some(key)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let key = key.as_str();
            let default_value = captures.get(2).map(|m| m.as_str());

            output.push_str(&line[last_end..overall.start()]);
            output.push_str(&resolve(key, default_value)?);

            last_end = overall.end();
        }

        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn resolve(key: &str, default_value: Option<&str>) -> Result<String, String> {
    let mut parts = key.split('.');

    match (parts.next(), parts.next(), parts.next()) {
        (Some("env"), Some(var_name), None) => std::env::var(var_name).or_else(|_| {
            default_value
                .map(str::to_owned)
                .ok_or_else(|| format!("environment variable not found: `{var_name}`"))
        }),
        _ => Err(format!("only variables scoped with 'env.' are supported: `{key}`")),
    }
}
