//! Rule evaluation.

use crate::{Finding, Report, Rule, RuleId, RuleSet, Severity};
use dispgen_core::{DisplayCharacterization, Eotf};
use dispgen_primaries::{ReferenceGamut, estimate_cct_duv, gamut_coverage};
use tracing::{debug, warn};

/// Runs a [`RuleSet`] against characterizations.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    rules: &'a RuleSet,
    strict: bool,
}

impl<'a> Validator<'a> {
    /// Non-strict validator over `rules`.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            strict: false,
        }
    }

    /// Escalates every finding to [`Severity::Error`] when `strict`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Checks `disp` and each requested EOTF variant.
    ///
    /// Findings are logged as they are produced and returned in rule
    /// order.
    pub fn validate(&self, disp: &DisplayCharacterization, variants: &[Eotf]) -> Report {
        let severity = if self.strict {
            Severity::Error
        } else {
            Severity::Warning
        };
        let mut report = Report::new();
        let mut checks = 0usize;

        for (id, rule) in self.rules.iter() {
            if !rule.enabled {
                debug!(rule = %id, "rule disabled");
                continue;
            }
            checks += 1;
            for message in check(id, &rule, disp, variants) {
                warn!(rule = %id, severity = %severity, "{message}");
                report.push(Finding {
                    rule: id,
                    severity,
                    message,
                });
            }
        }

        debug!(
            display = %disp.name,
            checks,
            findings = report.len(),
            strict = self.strict,
            "validation finished"
        );
        report
    }
}

fn check(id: RuleId, rule: &Rule, disp: &DisplayCharacterization, variants: &[Eotf]) -> Vec<String> {
    match id {
        RuleId::Primaries => check_primaries(rule, disp),
        RuleId::WhitePoint => check_white_point(rule, disp),
        RuleId::Luminance => check_luminance(disp),
        RuleId::ContrastRatio => check_contrast(rule, disp),
        RuleId::GamutCoverage => check_coverage(rule, disp),
        RuleId::WhitePointTemperature => check_temperature(rule, disp),
        RuleId::WhitePointDuv => check_duv(rule, disp),
        RuleId::AmbientLight => bound_check(
            rule,
            disp.viewing.ambient_light,
            "ambient light",
            "cd/m²",
        ),
        RuleId::ViewingAngle => bound_check(rule, disp.viewing.viewing_angle, "viewing angle", "°"),
        RuleId::EotfGamma => check_gamma(rule, disp, variants),
    }
}

fn bound_check(rule: &Rule, value: f64, what: &str, unit: &str) -> Vec<String> {
    if rule.contains(value) {
        return Vec::new();
    }
    vec![format!("{what} {value}{unit} outside {}", rule.range_label())]
}

fn check_primaries(rule: &Rule, disp: &DisplayCharacterization) -> Vec<String> {
    disp.primaries
        .named()
        .into_iter()
        .filter(|(_, c)| !(rule.contains(c.x) && rule.contains(c.y) && c.x + c.y <= 1.0))
        .map(|(name, c)| {
            format!(
                "{name} primary ({:.4}, {:.4}) is outside the xy chromaticity triangle (x, y in {}, x + y <= 1)",
                c.x,
                c.y,
                rule.range_label()
            )
        })
        .collect()
}

fn check_white_point(rule: &Rule, disp: &DisplayCharacterization) -> Vec<String> {
    let xy = disp.white_point.xy;
    if rule.contains(xy.x) && rule.contains(xy.y) {
        return Vec::new();
    }
    vec![format!(
        "white point ({:.4}, {:.4}) outside {}",
        xy.x,
        xy.y,
        rule.range_label()
    )]
}

fn check_luminance(disp: &DisplayCharacterization) -> Vec<String> {
    let lum = disp.luminance;
    let mut out = Vec::new();
    if !(lum.black_level > 0.0) {
        out.push(format!("black level {} cd/m² must be positive", lum.black_level));
    }
    if !(lum.peak_luminance > 0.0) {
        out.push(format!("peak luminance {} cd/m² must be positive", lum.peak_luminance));
    }
    if !(lum.peak_luminance > lum.black_level) {
        out.push(format!(
            "peak luminance {} cd/m² must exceed black level {} cd/m²",
            lum.peak_luminance, lum.black_level
        ));
    }
    out
}

fn check_contrast(rule: &Rule, disp: &DisplayCharacterization) -> Vec<String> {
    let lum = disp.luminance;
    let ratio = lum.contrast_ratio();
    if !(lum.black_level > 0.0) || !ratio.is_finite() || ratio <= 0.0 {
        return vec![format!(
            "contrast ratio undefined for black {} and peak {} cd/m²",
            lum.black_level, lum.peak_luminance
        )];
    }
    if rule.contains(ratio) {
        return Vec::new();
    }
    vec![format!("contrast ratio {ratio:.0}:1 outside {}", rule.range_label())]
}

fn check_coverage(rule: &Rule, disp: &DisplayCharacterization) -> Vec<String> {
    match gamut_coverage(&disp.primaries, ReferenceGamut::Rec709) {
        None => vec!["gamut coverage cannot be computed: primaries are degenerate".into()],
        Some(pct) if rule.contains(pct) => Vec::new(),
        Some(pct) => vec![format!(
            "gamut coverage {pct:.1}% of Rec.709 outside {}",
            rule.range_label()
        )],
    }
}

/// Stored metrics when present, else a fresh estimate.
fn white_metrics(disp: &DisplayCharacterization) -> Result<(f64, f64), String> {
    let wp = disp.white_point;
    if let (Some(cct), Some(duv)) = (wp.cct, wp.duv) {
        return Ok((cct, duv));
    }
    estimate_cct_duv(wp.xy).map_err(|e| e.to_string())
}

fn check_temperature(rule: &Rule, disp: &DisplayCharacterization) -> Vec<String> {
    match white_metrics(disp) {
        Err(e) => vec![e],
        Ok((cct, _)) if rule.contains(cct) => Vec::new(),
        Ok((cct, _)) => vec![format!(
            "white point CCT {cct:.0}K outside {}K",
            rule.range_label()
        )],
    }
}

fn check_duv(rule: &Rule, disp: &DisplayCharacterization) -> Vec<String> {
    match white_metrics(disp) {
        Err(e) => vec![e],
        Ok((_, duv)) if rule.contains(duv.abs()) => Vec::new(),
        Ok((_, duv)) => vec![format!(
            "white point duv {duv:.4} exceeds {}",
            rule.range_label()
        )],
    }
}

fn check_gamma(rule: &Rule, disp: &DisplayCharacterization, variants: &[Eotf]) -> Vec<String> {
    let mut seen: Vec<f64> = Vec::new();
    let mut out = Vec::new();
    for gamma in std::iter::once(&disp.eotf)
        .chain(variants)
        .filter_map(Eotf::gamma_value)
    {
        if seen.contains(&gamma) {
            continue;
        }
        seen.push(gamma);
        if !rule.contains(gamma) {
            out.push(format!("gamma {gamma} outside {}", rule.range_label()));
        }
    }
    out
}
