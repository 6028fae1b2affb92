//! Worked examples for vectors and lines.
//!
//! Prints the classic exercise set: sums, norms, dot products, angles,
//! projections, cross products and areas, then three line pairs (coincident,
//! crossing, parallel).
//!
//! Run: `cargo run -p linalg --example walkthrough`

use linalg::prelude::*;

fn v(coords: &[&str]) -> Result<Vector, LinalgError> {
    Vector::new(coords.iter().copied())
}

fn line(n: &[&str], k: &str) -> Result<Line, Box<dyn std::error::Error>> {
    Ok(Line::new(v(n)?, k.parse()?)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("-- arithmetic");
    println!("{}", v(&["8.218", "-9.341"])?.plus(&v(&["-1.129", "2.111"])?)?);
    println!("{}", v(&["7.119", "8.215"])?.minus(&v(&["-8.223", "0.878"])?)?);
    println!("{}", v(&["1.671", "-1.012", "-0.318"])?.times_scalar("7.41".parse()?)?);

    println!("-- magnitude and direction");
    println!("{}", v(&["-0.221", "7.437"])?.magnitude()?);
    println!("{}", v(&["8.813", "-1.331", "-6.247"])?.magnitude()?);
    println!("{}", v(&["5.581", "-2.136"])?.normalized()?);
    println!("{}", v(&["1.996", "3.108", "-4.554"])?.normalized()?);

    println!("-- dot products and angles");
    println!("{}", v(&["7.887", "4.138"])?.dot(&v(&["-8.802", "6.776"])?)?);
    println!("{}", v(&["-5.955", "-4.904", "-1.874"])?.dot(&v(&["-4.496", "-8.755", "7.103"])?)?);
    let rad = v(&["3.183", "-7.627"])?.angle_with(&v(&["-2.668", "5.319"])?, AngleUnit::Radians)?;
    println!("theta = {rad:.6} rad");
    let deg = v(&["7.35", "0.221", "5.188"])?
        .angle_with(&v(&["2.751", "8.259", "3.985"])?, AngleUnit::Degrees)?;
    println!("theta = {deg:.6} deg");

    println!("-- parallel / orthogonal");
    for (a, b) in [
        (v(&["-7.579", "-7.88"])?, v(&["22.737", "23.64"])?),
        (v(&["-2.029", "9.97", "4.172"])?, v(&["-9.231", "-6.639", "-7.245"])?),
        (v(&["-2.328", "-7.284", "-1.214"])?, v(&["-1.821", "1.072", "-2.94"])?),
        (v(&["2.118", "4.827"])?, v(&["0", "0"])?),
    ] {
        println!(
            "parallel={} orthogonal={}",
            a.is_parallel_to(&b)?,
            a.is_orthogonal_to(&b)?
        );
    }

    println!("-- projections");
    let b1 = v(&["0.825", "2.036"])?;
    println!("proj_b(v) = {}", v(&["3.039", "1.879"])?.component_parallel_to(&b1)?);
    let b2 = v(&["-2.155", "-9.353", "-9.473"])?;
    println!("v_perp = {}", v(&["-9.88", "-3.264", "-8.159"])?.component_orthogonal_to(&b2)?);
    let v3 = v(&["3.009", "-6.172", "3.692", "-2.51"])?;
    let b3 = v(&["6.404", "-9.144", "2.759", "8.718"])?;
    println!(
        "v = {} + {}",
        v3.component_parallel_to(&b3)?,
        v3.component_orthogonal_to(&b3)?
    );

    println!("-- cross products and areas");
    println!("{}", v(&["5", "3"])?.cross(&v(&["-1", "0"])?)?);
    let a = v(&["8.462", "7.893", "-8.187"])?;
    let b = v(&["6.984", "-5.975", "4.778"])?;
    println!("v x w = {}", a.cross(&b)?);
    let a = v(&["-8.987", "-9.838", "5.031"])?;
    let b = v(&["-4.268", "-1.861", "-8.866"])?;
    println!("area of parallelogram = {}", a.area_of_parallelogram_with(&b)?);
    let a = v(&["1.5", "9.547", "3.691"])?;
    let b = v(&["-6.007", "0.124", "5.772"])?;
    println!("area of triangle = {}", a.area_of_triangle_with(&b)?);

    println!("-- lines");
    let pairs = [
        (line(&["4.046", "2.836"], "1.21")?, line(&["10.115", "7.09"], "3.025")?),
        (line(&["7.204", "3.182"], "8.68")?, line(&["8.172", "4.114"], "9.883")?),
        (line(&["1.182", "5.562"], "6.744")?, line(&["1.773", "8.343"], "9.525")?),
    ];
    for (l1, l2) in &pairs {
        println!("{l1}  |  {l2}");
        println!(
            "  parallel={} same={} intersection={:?}",
            l1.is_parallel_to(l2),
            l1.coincides_with(l2),
            l1.intersection_with(l2)?
        );
    }
    Ok(())
}
