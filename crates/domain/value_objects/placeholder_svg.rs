pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const MAX_DIMENSION: u32 = 2000;

const BACKGROUND: &str = "#e5e7eb";
const FOREGROUND: &str = "#6b7280";

pub fn clamp_dimension(value: Option<u32>, default: u32) -> u32 {
    value.unwrap_or(default).clamp(1, MAX_DIMENSION)
}

/// Renders a flat grey SVG with centred caption text.
pub fn render_placeholder_svg(width: u32, height: u32, text: Option<&str>) -> String {
    let width = width.clamp(1, MAX_DIMENSION);
    let height = height.clamp(1, MAX_DIMENSION);
    let label = match text.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => format!("{}×{}", width, height),
    };
    let font_size = (width.min(height) / 8).max(10);

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<rect width="100%" height="100%" fill="{bg}"/>"#,
            r#"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" "#,
            r#"font-family="system-ui, sans-serif" font-size="{fs}" fill="{fg}">{label}</text>"#,
            "</svg>"
        ),
        w = width,
        h = height,
        bg = BACKGROUND,
        fg = FOREGROUND,
        fs = font_size,
        label = escape_xml(&label),
    )
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
