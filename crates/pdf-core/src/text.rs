//! Text rendering utilities

use crate::document::Color;
use crate::font::StandardFont;
use crate::{format_number, Align};

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Escape WinAnsi bytes for a PDF literal string
///
/// Wraps the bytes in parentheses and backslash-escapes `(`, `)` and `\`.
pub fn escape_literal(encoded: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded.len() + 2);
    out.push(b'(');
    for &b in encoded {
        match b {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(b);
            }
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\n' => out.extend_from_slice(b"\\n"),
            _ => out.push(b),
        }
    }
    out.push(b')');
    out
}

/// Generate PDF operators for text insertion
///
/// Creates the text operators (BT, rg, Tf, Td, Tj, ET) to render an
/// already-escaped literal string at a position with alignment support.
///
/// # Arguments
/// * `literal` - Escaped literal string including parentheses
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `align` - Text alignment
/// * `ctx` - Text rendering context
pub fn generate_text_operators(
    literal: &[u8],
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let x_offset = match align {
        Align::Left => 0.0,
        Align::Center => -ctx.text_width / 2.0,
        Align::Right => -ctx.text_width,
    };

    let mut ops = Vec::new();
    ops.extend_from_slice(b"BT\n");
    ops.extend_from_slice(
        format!(
            "{} {} {} rg\n",
            format_number(ctx.color.r as f64),
            format_number(ctx.color.g as f64),
            format_number(ctx.color.b as f64)
        )
        .as_bytes(),
    );
    ops.extend_from_slice(
        format!(
            "/{} {} Tf\n",
            ctx.font_name,
            format_number(ctx.font_size as f64)
        )
        .as_bytes(),
    );
    ops.extend_from_slice(
        format!("{} {} Td\n", format_number(x + x_offset), format_number(y)).as_bytes(),
    );
    ops.extend_from_slice(literal);
    ops.extend_from_slice(b" Tj\nET\n");
    ops
}

/// Split text into lines no wider than `max_width` points
///
/// Breaks on whitespace; a single word wider than the limit is broken
/// between characters. Explicit newlines always start a new line.
pub fn wrap_text(text: &str, font: StandardFont, font_size: f32, max_width: f64) -> Vec<String> {
    let fits = |s: &str| font.text_width_points(s, font_size) as f64 <= max_width;

    if max_width <= 0.0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if fits(word) {
                current = word.to_string();
                continue;
            }

            for ch in word.chars() {
                let mut next = current.clone();
                next.push(ch);
                if !current.is_empty() && !fits(&next) {
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                } else {
                    current = next;
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(text_width: f64) -> TextRenderContext {
        TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 12.0,
            text_width,
            color: Color::black(),
        }
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal(b"a(b)c\\"), b"(a\\(b\\)c\\\\)".to_vec());
        assert_eq!(escape_literal(b""), b"()".to_vec());
    }

    #[test]
    fn test_generate_text_operators_left() {
        let ops = generate_text_operators(b"(Hello)", 100.0, 700.0, Align::Left, &ctx(100.0));
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.starts_with("BT\n"));
        assert!(ops_str.contains("0 0 0 rg"));
        assert!(ops_str.contains("/F1 12 Tf"));
        assert!(ops_str.contains("100 700 Td"));
        assert!(ops_str.contains("(Hello) Tj"));
        assert!(ops_str.ends_with("ET\n"));
    }

    #[test]
    fn test_generate_text_operators_center() {
        let ops = generate_text_operators(b"(Test)", 200.0, 600.0, Align::Center, &ctx(100.0));
        let ops_str = String::from_utf8(ops).unwrap();
        assert!(ops_str.contains("150 600 Td"));
    }

    #[test]
    fn test_generate_text_operators_right() {
        let ops = generate_text_operators(b"(Right)", 300.0, 500.0, Align::Right, &ctx(80.0));
        let ops_str = String::from_utf8(ops).unwrap();
        assert!(ops_str.contains("220 500 Td"));
    }

    #[test]
    fn test_generate_text_operators_fractional_position() {
        let ops = generate_text_operators(b"(x)", 70.866, 600.5, Align::Left, &ctx(0.0));
        let ops_str = String::from_utf8(ops).unwrap();
        assert!(ops_str.contains("70.866 600.5 Td"));
    }

    #[test]
    fn test_generate_text_operators_with_color() {
        let mut context = ctx(10.0);
        context.color = Color::rgb(1.0, 0.0, 0.0);
        let ops = generate_text_operators(b"(A)", 0.0, 0.0, Align::Left, &context);
        let ops_str = String::from_utf8(ops).unwrap();
        assert!(ops_str.contains("1 0 0 rg"));
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        let lines = wrap_text("Short text", StandardFont::Helvetica, 10.0, 200.0);
        assert_eq!(lines, vec!["Short text".to_string()]);
    }

    #[test]
    fn test_wrap_breaks_on_width() {
        // Each "aaaa" is 4 * 556 = 2224 units = 22.24pt at 10pt; a space is 2.78pt
        let lines = wrap_text("aaaa aaaa aaaa", StandardFont::Helvetica, 10.0, 50.0);
        assert_eq!(lines, vec!["aaaa aaaa".to_string(), "aaaa".to_string()]);
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        // 10 * 5.56pt = 55.6pt, limit 30pt -> 5 chars per line
        let lines = wrap_text("aaaaaaaaaa", StandardFont::Helvetica, 10.0, 30.0);
        assert_eq!(lines, vec!["aaaaa".to_string(), "aaaaa".to_string()]);
    }

    #[test]
    fn test_wrap_respects_newlines() {
        let lines = wrap_text("one\ntwo", StandardFont::Helvetica, 10.0, 500.0);
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_wrap_empty() {
        let lines = wrap_text("   ", StandardFont::Helvetica, 10.0, 50.0);
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_wrap_zero_width_keeps_text() {
        let lines = wrap_text("Hello world", StandardFont::Helvetica, 10.0, 0.0);
        assert_eq!(lines, vec!["Hello world".to_string()]);
    }
}
