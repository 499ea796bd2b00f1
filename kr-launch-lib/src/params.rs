//! Parameter bindings forwarded to the estimation script as `--name=value` flags.
//!
//! The script parses every flag from its textual form, so values are spelled
//! the way Python prints them: `True`/`False` for booleans and `repr`-style
//! floats (`10.0`, `0.05`, `1e-05`).

use serde::{Deserialize, Serialize};

pub const DEFAULT_DIR_OUT_BASE: &str = "./Code/Alternative_KR_return/KR_ret_models/";

/// Number of flag tokens produced by [`RunParameters::flags`].
pub const FLAG_COUNT: usize = 9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The full set of parameters passed to one estimation run.
#[serde(default, deny_unknown_fields)]
pub struct RunParameters {
    /// Version of the maturity index grid.
    pub idx_ver: u32,
    /// Whether observations outside the maturity range are masked out.
    pub use_maturity_mask: bool,
    /// Whether the script uses multiprocessing.
    pub flg_mp: bool,
    /// Number of dates processed per trunk.
    pub num_t_each_trunk: u64,
    /// Repeat count, forwarded as `--R`.
    #[serde(rename = "R", alias = "repeats")]
    pub repeats: u32,
    pub l_fixed: f64,
    pub alpha_fixed: f64,
    pub delta_fixed: f64,
    /// Output directory, resolved by the script relative to its working directory.
    pub dir_out_base: String,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            idx_ver: 3,
            use_maturity_mask: true,
            flg_mp: false,
            num_t_each_trunk: 1000,
            repeats: 10,
            l_fixed: 10.0,
            alpha_fixed: 0.05,
            delta_fixed: 0.0,
            dir_out_base: DEFAULT_DIR_OUT_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Per-field replacements layered on top of a [`RunParameters`].
pub struct ParamOverrides {
    pub idx_ver: Option<u32>,
    pub use_maturity_mask: Option<bool>,
    pub flg_mp: Option<bool>,
    pub num_t_each_trunk: Option<u64>,
    pub repeats: Option<u32>,
    pub l_fixed: Option<f64>,
    pub alpha_fixed: Option<f64>,
    pub delta_fixed: Option<f64>,
    pub dir_out_base: Option<String>,
}

impl ParamOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl RunParameters {
    /// Renders the parameters as `--name=value` tokens in the order the
    /// script documents them.
    pub fn flags(&self) -> Vec<String> {
        vec![
            flag("idx_ver", self.idx_ver),
            flag("use_maturity_mask", python_bool(self.use_maturity_mask)),
            flag("flg_mp", python_bool(self.flg_mp)),
            flag("num_t_each_trunk", self.num_t_each_trunk),
            flag("R", self.repeats),
            flag("l_fixed", python_float(self.l_fixed)),
            flag("alpha_fixed", python_float(self.alpha_fixed)),
            flag("delta_fixed", python_float(self.delta_fixed)),
            flag("dir_out_base", &self.dir_out_base),
        ]
    }

    /// Replaces every field for which `overrides` carries a value.
    pub fn apply(&mut self, overrides: ParamOverrides) {
        let ParamOverrides {
            idx_ver,
            use_maturity_mask,
            flg_mp,
            num_t_each_trunk,
            repeats,
            l_fixed,
            alpha_fixed,
            delta_fixed,
            dir_out_base,
        } = overrides;

        if let Some(value) = idx_ver {
            self.idx_ver = value;
        }
        if let Some(value) = use_maturity_mask {
            self.use_maturity_mask = value;
        }
        if let Some(value) = flg_mp {
            self.flg_mp = value;
        }
        if let Some(value) = num_t_each_trunk {
            self.num_t_each_trunk = value;
        }
        if let Some(value) = repeats {
            self.repeats = value;
        }
        if let Some(value) = l_fixed {
            self.l_fixed = value;
        }
        if let Some(value) = alpha_fixed {
            self.alpha_fixed = value;
        }
        if let Some(value) = delta_fixed {
            self.delta_fixed = value;
        }
        if let Some(value) = dir_out_base {
            self.dir_out_base = value;
        }
    }
}

fn flag(name: &str, value: impl std::fmt::Display) -> String {
    format!("--{name}={value}")
}

pub fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Formats a float the way Python's `repr` does.
///
/// Rust's `Display` drops the fractional part of integral values and never
/// switches to scientific notation, while Python keeps `.0` and uses an
/// exponent (signed, at least two digits) outside `[1e-4, 1e16)`.
pub fn python_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
            }
        }
        return formatted;
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{formatted}.0")
    }
}
