use crate::config::{FormatOptions, OutputFormat};
use crate::error::Result;
use crate::grouping::Grouping;

/// Render a grouping into the canonical textual form selected by the options
///
/// Pure function of its inputs: byte-for-byte reproducible, category display
/// order and within-category token order taken verbatim from the grouping.
pub fn render(grouping: &Grouping, options: &FormatOptions) -> Result<String> {
    options.validate()?;

    Ok(match options.format {
        OutputFormat::ClsxCall => render_delimited(grouping, options, "clsx(", ")"),
        OutputFormat::Array => render_delimited(grouping, options, "[", "]"),
        OutputFormat::TemplateLiteral => render_template(grouping, options),
        OutputFormat::RawMapping => render_raw(grouping)?,
    })
}

/// Shared shape of the clsx-call and array forms: one quoted segment per
/// category, comma-terminated except the last.
fn render_delimited(
    grouping: &Grouping,
    options: &FormatOptions,
    open: &str,
    close: &str,
) -> String {
    let mut lines = vec![open.to_string()];
    let last = grouping.len().saturating_sub(1);

    for (index, group) in grouping.iter().enumerate() {
        if options.include_comments {
            lines.push(format!("{}// {}", options.indent, group.category.label()));
        }

        let terminator = if index == last { "" } else { "," };
        lines.push(format!(
            "{}\"{}\"{}",
            options.indent,
            group.tokens.join(" "),
            terminator
        ));
    }

    lines.push(close.to_string());
    lines.join("\n")
}

fn render_template(grouping: &Grouping, options: &FormatOptions) -> String {
    let mut lines = vec!["`".to_string()];

    for group in grouping.iter() {
        if options.include_comments {
            lines.push(format!("{}// {}", options.indent, group.category.label()));
        }
        lines.push(format!("{}{}", options.indent, group.tokens.join(" ")));
    }

    lines.push("`".to_string());
    lines.join("\n")
}

fn render_raw(grouping: &Grouping) -> Result<String> {
    Ok(serde_json::to_string_pretty(grouping)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clsx_call_form() {
        let grouping = group("flex items-center p-4 bg-white");
        let rendered = render(&grouping, &FormatOptions::default()).unwrap();
        assert_eq!(
            rendered,
            "clsx(\n  // Layout\n  \"flex items-center\",\n  // Spacing\n  \"p-4\",\n  // Background\n  \"bg-white\"\n)"
        );
    }

    #[test]
    fn test_array_form() {
        let grouping = group("flex p-4");
        let options = FormatOptions::with_format(OutputFormat::Array);
        let rendered = render(&grouping, &options).unwrap();
        assert_eq!(
            rendered,
            "[\n  // Layout\n  \"flex\",\n  // Spacing\n  \"p-4\"\n]"
        );
    }

    #[test]
    fn test_template_literal_form() {
        let grouping = group("flex p-4");
        let options = FormatOptions::with_format(OutputFormat::TemplateLiteral);
        let rendered = render(&grouping, &options).unwrap();
        assert_eq!(rendered, "`\n  // Layout\n  flex\n  // Spacing\n  p-4\n`");
    }

    #[test]
    fn test_raw_mapping_form() {
        let grouping = group("flex p-4");
        let options = FormatOptions::with_format(OutputFormat::RawMapping);
        let rendered = render(&grouping, &options).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"layout\": [\n    \"flex\"\n  ],\n  \"spacing\": [\n    \"p-4\"\n  ]\n}"
        );
    }

    #[test]
    fn test_comments_can_be_disabled() {
        let grouping = group("flex p-4");
        let options = FormatOptions {
            include_comments: false,
            ..Default::default()
        };
        let rendered = render(&grouping, &options).unwrap();
        assert_eq!(rendered, "clsx(\n  \"flex\",\n  \"p-4\"\n)");
    }

    #[test]
    fn test_custom_indent() {
        let grouping = group("flex p-4");
        let options = FormatOptions {
            indent: "    ".to_string(),
            include_comments: false,
            ..Default::default()
        };
        let rendered = render(&grouping, &options).unwrap();
        assert_eq!(rendered, "clsx(\n    \"flex\",\n    \"p-4\"\n)");
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let grouping = group("flex p-4");
        let options = FormatOptions {
            min_tokens: 0,
            ..Default::default()
        };
        assert!(render(&grouping, &options).is_err());
    }

    #[test]
    fn test_render_is_deterministic() {
        let grouping = group("mt-4 flex bg-white shadow-sm");
        let options = FormatOptions::default();
        let first = render(&grouping, &options).unwrap();
        let second = render(&grouping, &options).unwrap();
        assert_eq!(first, second);
    }
}
