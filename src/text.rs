use anyhow::Result;
use cosmic_text::fontdb::{Query, Stretch, Style, Weight};
use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache};

/// Families tried in order; the last one is satisfied by the bundled font.
const FONT_CASCADE: [&str; 3] = ["Helvetica", "Arial", "DejaVu Sans"];

/// Ships inside the binary so label rendering works on hosts without any
/// installed fonts.
const FALLBACK_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// System font database plus the bundled fallback.
pub fn font_system() -> FontSystem {
    let mut font_system = FontSystem::new();
    font_system.db_mut().load_font_data(FALLBACK_FONT.to_vec());
    font_system
}

pub struct Typeface {
    font_system: FontSystem,
    cache: SwashCache,
    family: String,
}

impl Typeface {
    /// Resolves the label family through the cascade.
    pub fn load() -> Result<Self> {
        Self::new(font_system())
    }

    pub fn new(font_system: FontSystem) -> Result<Self> {
        let families: Vec<_> = FONT_CASCADE.iter().map(|name| Family::Name(name)).collect();
        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let db = font_system.db();
        let family = db
            .query(&query)
            .and_then(|id| db.face(id))
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no usable font available; rebuild with an intact assets/DejaVuSans.ttf"
                )
            })?;
        tracing::debug!("label font resolved to {}", family);
        Ok(Self {
            font_system,
            cache: SwashCache::new(),
            family,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Shapes and rasterizes a single line of `text` at `px` pixels.
    pub fn raster(&mut self, text: &str, px: f32, rgba: [u8; 4]) -> TextRaster {
        let mut spans = Vec::new();
        if px < 1.0 {
            return TextRaster { spans };
        }
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(px, px));
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            Attrs::new().family(Family::Name(&self.family)),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer.draw(
            &mut self.font_system,
            &mut self.cache,
            Color::rgba(rgba[0], rgba[1], rgba[2], rgba[3]),
            |x, y, w, h, color| {
                if color.a() == 0 || w == 0 || h == 0 {
                    return;
                }
                spans.push(Span {
                    x,
                    y,
                    w,
                    h,
                    rgba: [color.r(), color.g(), color.b(), color.a()],
                });
            },
        );
        TextRaster { spans }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Span {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    pub rgba: [u8; 4],
}

pub struct TextRaster {
    spans: Vec<Span>,
}

impl TextRaster {
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Inclusive ink bounding box as (left, top, right, bottom), or `None`
    /// when nothing was inked.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for span in &self.spans {
            let right = span.x + span.w as i32 - 1;
            let bottom = span.y + span.h as i32 - 1;
            bounds = Some(match bounds {
                Some((l, t, r, b)) => (l.min(span.x), t.min(span.y), r.max(right), b.max(bottom)),
                None => (span.x, span.y, right, bottom),
            });
        }
        bounds
    }
}
