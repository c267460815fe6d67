//! OCIO v2 YAML writer.
//!
//! The config is mapped onto borrowed serde structs and serialized with
//! `serde_yaml`, which renders enum variants as local tags
//! (`!MatrixTransform`). OCIO expects verbatim tags (`!<MatrixTransform>`),
//! so known tag names are rewritten afterwards. Only a tag in node
//! position is touched: after a sequence dash or a plain `key: `, ending
//! its line, and outside block scalars. Quoted and literal text stays
//! as written.

use crate::colorspace::ColorSpace;
use crate::config::{Config, ProfileVersion};
use crate::display::{View, ViewTransform};
use crate::error::{OcioError, OcioResult};
use crate::transform::{Transform, TransformDirection};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const TAG_PATTERN: &str = r"^([ \t]*(?:- )*(?:[A-Za-z0-9_]+: )?)!(ColorSpace|ViewTransform|View|MatrixTransform|ExponentTransform|RangeTransform|BuiltinTransform|GroupTransform)((?:[ \t]+\{\})?)[ \t]*$";

static TAG_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// Serializes `config` to an OCIO v2 document.
pub fn to_yaml_string(config: &Config) -> OcioResult<String> {
    let raw = RawConfig::from_config(config);
    let yaml = serde_yaml::to_string(&raw)?;
    let re = TAG_RE
        .get_or_init(|| Regex::new(TAG_PATTERN))
        .as_ref()
        .map_err(|e| OcioError::Pattern(e.clone()))?;

    let mut out = String::with_capacity(yaml.len() + 256);
    // Indent of the line that opened the current block scalar.
    let mut block: Option<usize> = None;
    for line in yaml.split_inclusive('\n') {
        let body = line.trim_end_matches('\n');
        let indent = body.len() - body.trim_start().len();
        if let Some(parent) = block {
            if body.trim().is_empty() || indent > parent {
                out.push_str(line);
                continue;
            }
            block = None;
        }
        if opens_block_scalar(body) {
            block = Some(indent);
        }
        out.push_str(&re.replace(body, "${1}!<${2}>${3}"));
        out.push_str(&line[body.len()..]);
    }
    Ok(out)
}

/// True for `key: |-`, `- >` and similar block scalar headers.
fn opens_block_scalar(line: &str) -> bool {
    let head = line
        .trim_end()
        .trim_end_matches(|c: char| c.is_ascii_digit() || c == '-' || c == '+');
    let Some(before) = head.strip_suffix(['|', '>']) else {
        return false;
    };
    before.trim().is_empty() || before.ends_with(": ") || before.ends_with("- ")
}

/// Writes `config` to `path`.
pub fn write_config(config: &Config, path: impl AsRef<Path>) -> OcioResult<()> {
    let path = path.as_ref();
    let text = to_yaml_string(config)?;
    std::fs::write(path, &text).map_err(|source| OcioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote config");
    Ok(())
}

// ============================================================================
// Raw YAML structures for serde
// ============================================================================

fn is_empty_str(s: &&str) -> bool {
    s.is_empty()
}

fn is_forward(d: &Direction) -> bool {
    d.0 == TransformDirection::Forward
}

fn is_zero4(v: &[f64; 4]) -> bool {
    v.iter().all(|c| *c == 0.0)
}

struct Version(ProfileVersion);

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if self.0.minor == 0 {
            return s.serialize_u32(self.0.major);
        }
        match self.0.to_string().parse::<f64>() {
            Ok(v) if self.0.minor < 10 => s.serialize_f64(v),
            _ => s.serialize_str(&self.0.to_string()),
        }
    }
}

struct Direction(TransformDirection);

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(match self.0 {
            TransformDirection::Forward => "forward",
            TransformDirection::Inverse => "inverse",
        })
    }
}

/// Map that serializes in insertion order.
struct Ordered<'a, V>(Vec<(&'a str, V)>);

impl<V: Serialize> Serialize for Ordered<'_, V> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

#[derive(Serialize)]
struct RawConfig<'a> {
    ocio_profile_version: Version,
    #[serde(skip_serializing_if = "is_empty_str")]
    name: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    description: &'a str,
    roles: Ordered<'a, &'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_view_transform: Option<&'a str>,
    displays: Ordered<'a, Vec<RawEntry<'a>>>,
    active_displays: Vec<&'a str>,
    active_views: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    inactive_colorspaces: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    view_transforms: Vec<RawEntry<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    display_colorspaces: Vec<RawEntry<'a>>,
    colorspaces: Vec<RawEntry<'a>>,
}

impl<'a> RawConfig<'a> {
    fn from_config(config: &'a Config) -> Self {
        let strs = |v: &'a [String]| v.iter().map(String::as_str).collect::<Vec<_>>();
        Self {
            ocio_profile_version: Version(config.version()),
            name: config.name(),
            description: config.description(),
            roles: Ordered(config.roles().collect()),
            default_view_transform: config.default_view_transform(),
            displays: Ordered(
                config
                    .displays()
                    .iter()
                    .map(|d| (d.name(), d.views().iter().map(RawEntry::view).collect()))
                    .collect(),
            ),
            active_displays: strs(config.active_displays()),
            active_views: strs(config.active_views()),
            inactive_colorspaces: strs(config.inactive_colorspaces()),
            view_transforms: config
                .view_transforms()
                .iter()
                .map(RawEntry::view_transform)
                .collect(),
            display_colorspaces: config
                .display_colorspaces()
                .map(RawEntry::colorspace)
                .collect(),
            colorspaces: config.scene_colorspaces().map(RawEntry::colorspace).collect(),
        }
    }
}

#[derive(Serialize)]
enum RawEntry<'a> {
    ColorSpace(RawColorSpace<'a>),
    View(RawView<'a>),
    ViewTransform(RawViewTransform<'a>),
}

impl<'a> RawEntry<'a> {
    fn colorspace(cs: &'a ColorSpace) -> Self {
        let (to_scene, from_scene, to_display, from_display) = if cs.is_display() {
            (None, None, cs.to_reference(), cs.from_reference())
        } else {
            (cs.to_reference(), cs.from_reference(), None, None)
        };
        Self::ColorSpace(RawColorSpace {
            name: cs.name(),
            aliases: cs.aliases().iter().map(String::as_str).collect(),
            family: cs.family(),
            bitdepth: cs.bit_depth().map(|b| b.as_str()),
            description: cs.description(),
            isdata: cs.is_data(),
            categories: cs.categories().iter().map(String::as_str).collect(),
            encoding: cs.encoding().map(|e| e.as_str()),
            to_scene_reference: to_scene.map(RawTransform::from),
            from_scene_reference: from_scene.map(RawTransform::from),
            to_display_reference: to_display.map(RawTransform::from),
            from_display_reference: from_display.map(RawTransform::from),
        })
    }

    fn view(view: &'a View) -> Self {
        Self::View(RawView {
            name: view.name(),
            colorspace: view.colorspace(),
            view_transform: view.view_transform(),
            display_colorspace: view.display_colorspace(),
            description: view.description(),
        })
    }

    fn view_transform(vt: &'a ViewTransform) -> Self {
        Self::ViewTransform(RawViewTransform {
            name: vt.name(),
            family: vt.family(),
            description: vt.description(),
            from_scene_reference: vt.from_scene_reference().map(RawTransform::from),
            to_scene_reference: vt.to_scene_reference().map(RawTransform::from),
        })
    }
}

#[derive(Serialize)]
struct RawColorSpace<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<&'a str>,
    #[serde(skip_serializing_if = "is_empty_str")]
    family: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitdepth: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty_str")]
    description: &'a str,
    isdata: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    categories: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_scene_reference: Option<RawTransform<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_scene_reference: Option<RawTransform<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_display_reference: Option<RawTransform<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_display_reference: Option<RawTransform<'a>>,
}

#[derive(Serialize)]
struct RawView<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    colorspace: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view_transform: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_colorspace: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty_str")]
    description: &'a str,
}

#[derive(Serialize)]
struct RawViewTransform<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    family: &'a str,
    #[serde(skip_serializing_if = "is_empty_str")]
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_scene_reference: Option<RawTransform<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_scene_reference: Option<RawTransform<'a>>,
}

#[derive(Serialize)]
enum RawTransform<'a> {
    MatrixTransform(RawMatrixTransform<'a>),
    ExponentTransform(RawExponentTransform<'a>),
    RangeTransform(RawRangeTransform),
    BuiltinTransform(RawBuiltinTransform<'a>),
    GroupTransform(RawGroupTransform<'a>),
}

impl<'a> From<&'a Transform> for RawTransform<'a> {
    fn from(t: &'a Transform) -> Self {
        match t {
            Transform::Matrix(m) => Self::MatrixTransform(RawMatrixTransform {
                matrix: &m.matrix,
                offset: &m.offset,
                direction: Direction(m.direction),
            }),
            Transform::Exponent(e) => Self::ExponentTransform(RawExponentTransform {
                value: &e.value,
                direction: Direction(e.direction),
            }),
            Transform::Range(r) => Self::RangeTransform(RawRangeTransform {
                min_in_value: r.min_in,
                max_in_value: r.max_in,
                min_out_value: r.min_out,
                max_out_value: r.max_out,
                direction: Direction(r.direction),
            }),
            Transform::Builtin(b) => Self::BuiltinTransform(RawBuiltinTransform {
                style: &b.style,
                direction: Direction(b.direction),
            }),
            Transform::Group(g) => Self::GroupTransform(RawGroupTransform {
                children: g.transforms.iter().map(RawTransform::from).collect(),
                direction: Direction(g.direction),
            }),
        }
    }
}

#[derive(Serialize)]
struct RawMatrixTransform<'a> {
    matrix: &'a [f64; 16],
    #[serde(skip_serializing_if = "is_zero4")]
    offset: &'a [f64; 4],
    #[serde(skip_serializing_if = "is_forward")]
    direction: Direction,
}

#[derive(Serialize)]
struct RawExponentTransform<'a> {
    value: &'a [f64; 4],
    #[serde(skip_serializing_if = "is_forward")]
    direction: Direction,
}

#[derive(Serialize)]
struct RawRangeTransform {
    #[serde(skip_serializing_if = "Option::is_none")]
    min_in_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_in_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_out_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_out_value: Option<f64>,
    #[serde(skip_serializing_if = "is_forward")]
    direction: Direction,
}

#[derive(Serialize)]
struct RawBuiltinTransform<'a> {
    style: &'a str,
    #[serde(skip_serializing_if = "is_forward")]
    direction: Direction,
}

#[derive(Serialize)]
struct RawGroupTransform<'a> {
    children: Vec<RawTransform<'a>>,
    #[serde(skip_serializing_if = "is_forward")]
    direction: Direction,
}
