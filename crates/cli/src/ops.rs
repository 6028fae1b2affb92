//! Subcommand bodies: parse operands, call `linalg`, build JSON-ready reports.
//!
//! Decimals are reported as strings so no precision is lost in JSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use linalg::{AngleUnit, Decimal, Line, LineIntersection, Vector};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VectorOp {
    Plus,
    Minus,
    Scale,
    Magnitude,
    Normalize,
    Dot,
    Angle,
    Cross,
    Parallelogram,
    Triangle,
    ParallelComponent,
    OrthogonalComponent,
    IsZero,
    IsParallel,
    IsOrthogonal,
}

#[derive(Debug, Serialize)]
pub struct VectorReport {
    pub op: VectorOp,
    pub a: Value,
    pub b: Option<Value>,
    pub result: Value,
}

#[derive(Debug, Serialize)]
pub struct LineReport {
    pub first: String,
    pub second: String,
    pub parallel: bool,
    pub same_line: bool,
    pub intersection: Value,
}

fn coords(v: &Vector) -> Value {
    Value::from(v.iter().map(Decimal::to_string).collect::<Vec<_>>())
}

fn parse_vector(text: &str, name: &str) -> Result<Vector> {
    text.parse::<Vector>()
        .with_context(|| format!("parsing --{name} {text:?}"))
}

fn parse_scalar(text: &str, name: &str) -> Result<Decimal> {
    linalg::scalar::IntoScalar::into_scalar(text)
        .map_err(|bad| anyhow::anyhow!("--{name} {bad:?} is not a decimal"))
}

pub fn run_vector(
    op: VectorOp,
    a: &str,
    b: Option<&str>,
    scalar: Option<&str>,
    unit: AngleUnit,
) -> Result<VectorReport> {
    let a = parse_vector(a, "a")?;
    let b = b.map(|t| parse_vector(t, "b")).transpose()?;
    let rhs = || b.as_ref().context("--b is required for this operation");

    let result = match op {
        VectorOp::Plus => coords(&a.plus(rhs()?)?),
        VectorOp::Minus => coords(&a.minus(rhs()?)?),
        VectorOp::Scale => {
            let s = parse_scalar(scalar.context("--scalar is required for scale")?, "scalar")?;
            coords(&a.times_scalar(s)?)
        }
        VectorOp::Magnitude => json!(a.magnitude()?.to_string()),
        VectorOp::Normalize => coords(&a.normalized()?),
        VectorOp::Dot => json!(a.dot(rhs()?)?.to_string()),
        VectorOp::Angle => json!(a.angle_with(rhs()?, unit)?),
        VectorOp::Cross => coords(&a.cross(rhs()?)?),
        VectorOp::Parallelogram => json!(a.area_of_parallelogram_with(rhs()?)?.to_string()),
        VectorOp::Triangle => json!(a.area_of_triangle_with(rhs()?)?.to_string()),
        VectorOp::ParallelComponent => coords(&a.component_parallel_to(rhs()?)?),
        VectorOp::OrthogonalComponent => coords(&a.component_orthogonal_to(rhs()?)?),
        VectorOp::IsZero => json!(a.is_zero()),
        VectorOp::IsParallel => json!(a.is_parallel_to(rhs()?)?),
        VectorOp::IsOrthogonal => json!(a.is_orthogonal_to(rhs()?)?),
    };
    tracing::debug!(?op, %result, "vector result");
    Ok(VectorReport {
        op,
        a: coords(&a),
        b: b.as_ref().map(coords),
        result,
    })
}

pub fn run_line(
    normal1: &str,
    constant1: &str,
    normal2: &str,
    constant2: &str,
) -> Result<LineReport> {
    let l1 = Line::new(
        parse_vector(normal1, "normal1")?,
        parse_scalar(constant1, "constant1")?,
    )?;
    let l2 = Line::new(
        parse_vector(normal2, "normal2")?,
        parse_scalar(constant2, "constant2")?,
    )?;
    let intersection = match l1.intersection_with(&l2)? {
        LineIntersection::Point(p) => json!({ "kind": "point", "point": coords(&p) }),
        LineIntersection::SameLine => json!({ "kind": "same_line" }),
        LineIntersection::Parallel => json!({ "kind": "parallel" }),
    };
    Ok(LineReport {
        first: l1.to_string(),
        second: l2.to_string(),
        parallel: l1.is_parallel_to(&l2),
        same_line: l1.coincides_with(&l2),
        intersection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_report_lists_exact_coordinates() {
        let r = run_vector(
            VectorOp::Cross,
            "8.462,7.893,-8.187",
            Some("6.984,-5.975,4.778"),
            None,
            AngleUnit::Radians,
        )
        .unwrap();
        assert_eq!(r.result, json!(["-11.204571", "-97.609444", "-105.685162"]));
        let text = serde_json::to_value(&r).unwrap();
        assert_eq!(text["op"], "cross");
    }

    #[test]
    fn binary_op_without_rhs_is_an_error() {
        let err = run_vector(VectorOp::Dot, "1,2", None, None, AngleUnit::Radians).unwrap_err();
        assert!(err.to_string().contains("--b is required"));
    }

    #[test]
    fn library_errors_surface_with_context() {
        let err = run_vector(VectorOp::Plus, "1,x", Some("1,2"), None, AngleUnit::Radians)
            .unwrap_err();
        assert!(format!("{err:#}").contains("not a finite decimal"));
        let err = run_vector(VectorOp::Normalize, "0,0", None, None, AngleUnit::Radians)
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot normalize the zero vector");
        let err = run_vector(
            VectorOp::Dot,
            "1000000000000000",
            Some("1000000000000000"),
            None,
            AngleUnit::Radians,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "result exceeds the decimal range");
    }

    #[test]
    fn scale_reads_the_scalar_flag() {
        let r = run_vector(VectorOp::Scale, "1,-2", None, Some("-1.5"), AngleUnit::Radians)
            .unwrap();
        assert_eq!(r.result, json!(["-1.5", "3.0"]));
    }

    #[test]
    fn line_report_classifies_pairs() {
        let r = run_line("1.182,5.562", "6.744", "1.773,8.343", "9.525").unwrap();
        assert!(r.parallel);
        assert!(!r.same_line);
        assert_eq!(r.intersection["kind"], "parallel");

        let r = run_line("4.046,2.836", "1.21", "10.115,7.09", "3.025").unwrap();
        assert!(r.same_line);
        assert_eq!(r.intersection["kind"], "same_line");

        let r = run_line("1,0", "0", "1,0.00000000001", "1").unwrap();
        assert!(r.parallel);
        assert_eq!(r.intersection["kind"], "point");

        let r = run_line("1,0", "2", "0,1", "3").unwrap();
        assert_eq!(r.first, "x_1 = 2");
        let point: Vec<Decimal> = r.intersection["point"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c.as_str().unwrap().parse().unwrap())
            .collect();
        assert_eq!(point, vec![Decimal::from(2), Decimal::from(3)]);
    }
}
