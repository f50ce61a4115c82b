//! Startup banner. The title is shaded left to right through one colour per
//! configured avatar source, with the chain order printed underneath.

use crate::shared::config::AvatarKind;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};
use tracing::debug;

type Rgb = (u8, u8, u8);

/// Shade used for a source in the banner and the chain line.
fn kind_color(kind: AvatarKind) -> Rgb {
    match kind {
        AvatarKind::Auth => (0xf5, 0xa6, 0x23),
        AvatarKind::FileSystem => (0x2e, 0xc4, 0x9c),
        AvatarKind::Gravatar => (0x1e, 0x8c, 0xbe),
    }
}

fn kind_label(kind: AvatarKind) -> &'static str {
    match kind {
        AvatarKind::Auth => "auth",
        AvatarKind::FileSystem => "file_system",
        AvatarKind::Gravatar => "gravatar",
    }
}

/// Colour for each of `width` columns, spread evenly over `stops`.
/// No stops gives plain grey.
fn column_colors(width: usize, stops: &[Rgb]) -> Vec<Rgb> {
    const GREY: Rgb = (0x9e, 0x9e, 0x9e);
    match stops {
        [] => vec![GREY; width],
        [only] => vec![*only; width],
        _ => (0..width)
            .map(|col| {
                let pos = if width <= 1 {
                    0.0
                } else {
                    col as f64 / (width - 1) as f64 * (stops.len() - 1) as f64
                };
                let seg = (pos.floor() as usize).min(stops.len() - 2);
                let t = pos - seg as f64;
                let (a, b) = (stops[seg], stops[seg + 1]);
                let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
                (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
            })
            .collect(),
    }
}

fn set_color(out: &mut impl Write, (r, g, b): Rgb) {
    let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
}

/// Prints the banner for the given chain. Falls back to a plain title if the
/// font cannot be rendered.
pub fn print_welcome(kinds: &[AvatarKind]) {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("avatars").map(|figure| figure.to_string()));
    let art = art.unwrap_or_else(|| {
        debug!("figlet font unavailable, printing plain title");
        "avatars".to_string()
    });

    let stops: Vec<Rgb> = kinds.iter().copied().map(kind_color).collect();
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let colors = column_colors(width, &stops);
    for line in art.lines() {
        for (ch, color) in line.chars().zip(colors.iter().copied()) {
            set_color(&mut out, color);
            let _ = out.execute(Print(ch));
        }
        let _ = out.execute(ResetColor);
        let _ = out.execute(Print("\r\n"));
    }

    for (i, kind) in kinds.iter().copied().enumerate() {
        if i > 0 {
            let _ = out.execute(ResetColor);
            let _ = out.execute(Print(" -> "));
        }
        set_color(&mut out, kind_color(kind));
        let _ = out.execute(Print(kind_label(kind)));
    }
    let _ = out.execute(ResetColor);
    let _ = out.execute(Print(format!("  (v{})\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.flush();
}
