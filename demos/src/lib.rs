//! QSCOUT Demo Suite
//!
//! Console helpers shared by the demo binaries, plus the small amount of
//! parsing needed to turn command-line words into gate arguments:
//!
//! - qubits are written `q3` or `3`;
//! - angles are plain numbers or multiples of π such as `pi/2`, `-pi`,
//!   `0.5*pi` or `3pi/4`.

use anyhow::{Context, bail};
use console::style;
use qscout_gates::{AngleExpr, GateArg, GateSignature, ParamKind, QubitId};
use qscout_noise::Superoperator;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue().bold(), message);
}

/// Parse a qubit index, with or without a leading `q`.
pub fn parse_qubit(word: &str) -> anyhow::Result<QubitId> {
    let digits = word.strip_prefix('q').unwrap_or(word);
    let index: u32 = digits
        .parse()
        .with_context(|| format!("'{word}' is not a qubit index"))?;
    Ok(QubitId(index))
}

/// Parse an angle: a real number or a rational multiple of π.
pub fn parse_angle(word: &str) -> anyhow::Result<AngleExpr> {
    let trimmed = word.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        return Ok(AngleExpr::value(v));
    }

    let lower = trimmed.to_ascii_lowercase();
    let (negative, body) = match lower.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, lower.as_str()),
    };
    let Some(pos) = body.find("pi") else {
        bail!("'{word}' is not a number or a multiple of pi");
    };

    let coefficient = body[..pos].trim_end_matches('*');
    let divisor = body[pos + 2..].trim_start();

    let mut expr = AngleExpr::Pi;
    if !coefficient.is_empty() {
        let k: f64 = coefficient
            .parse()
            .with_context(|| format!("bad coefficient in '{word}'"))?;
        expr = AngleExpr::value(k) * expr;
    }
    if let Some(d) = divisor.strip_prefix('/') {
        let d: f64 = d
            .trim()
            .parse()
            .with_context(|| format!("bad divisor in '{word}'"))?;
        expr = expr / AngleExpr::value(d);
    } else if !divisor.is_empty() {
        bail!("unexpected '{divisor}' after pi in '{word}'");
    }

    Ok(if negative { -expr } else { expr })
}

/// Turn command-line words into arguments for `signature`, in its
/// declared parameter order.
pub fn parse_gate_args(signature: &GateSignature, words: &[String]) -> anyhow::Result<Vec<GateArg>> {
    let params = signature.parameters();
    if words.len() != params.len() {
        bail!(
            "{} takes {} arguments ({signature}), got {}",
            signature.name(),
            params.len(),
            words.len()
        );
    }

    params
        .iter()
        .zip(words)
        .map(|(param, word)| {
            Ok(match param.kind {
                ParamKind::Qubit => GateArg::from(parse_qubit(word)?),
                ParamKind::Float => GateArg::from(parse_angle(word)?),
            })
        })
        .collect()
}

/// Render a superoperator row by row with fixed precision.
pub fn format_superoperator(matrix: &Superoperator, precision: usize) -> String {
    let width = precision + 4;
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|v| {
                    // Avoid printing "-0.000".
                    let v = if v.abs() < 0.5 * 10f64.powi(-(precision as i32)) {
                        0.0
                    } else {
                        *v
                    };
                    format!("{v:>width$.precision$}")
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
