use std::error::Error;

use chemical_exposure_safety::{run_assessment, AssessmentContext, ExposureType, HazardCategory};

fn main() -> Result<(), Box<dyn Error>> {
    // Worked example: full-shift solvent readings against a 50 ppm limit.
    let sample = [12.0, 45.0, 60.0, 5.0, 80.0];
    let limit = 50.0;

    let context = AssessmentContext {
        organization: "Acme Chemicals Ltd.".to_string(),
        location: "Norwich, UK".to_string(),
        process: "Batch Reactor Cleaning".to_string(),
        exposure_type: ExposureType::FullShift,
    };

    let report = run_assessment(&sample, limit, &context)?;

    println!(
        "assessment: {} / {} / {}",
        context.organization,
        context.process,
        context.exposure_type.label()
    );

    let stats = report.statistics.rounded();
    println!(
        "statistics: n={} mean={} sd={} min={} max={} p95={}",
        stats.n, stats.mean, stats.std_dev, stats.min, stats.max, stats.p95
    );
    if let (Some(gm), Some(gsd)) = (stats.geo_mean, stats.geo_std_dev) {
        println!("geometric:  gm={gm} gsd={gsd}");
    }

    println!("band,description,count,percent");
    for (label, description, count, pct) in report.distribution.rows() {
        println!("{label},{description},{count},{pct}");
    }

    let prior = report.prior.percentages();
    let posterior = report.posterior.percentages();
    println!("belief (prior -> posterior, %):");
    for category in HazardCategory::ALL {
        let i = category.index();
        println!("  {}: {} -> {}", category.label(), prior[i], posterior[i]);
    }

    match &report.acceptability {
        Ok(a) => {
            println!(
                "confidence interval: ({:.2}, {:.2}) ppm, n={}",
                a.interval.lower, a.interval.upper, a.interval.n
            );
            println!("verdict: {:?} ({})", a.verdict, a.verdict.color());
            println!(
                "screening posterior: acceptable={:.2} unacceptable={:.2}",
                a.screening.acceptable, a.screening.unacceptable
            );
            let outlook = a.screening.outlook();
            println!("outlook: {}", outlook.advisory());
            println!("summary: {}", outlook.summary_action());
        }
        Err(e) => println!("confidence interval unavailable: {e}"),
    }

    println!(
        "required protection factor: {}",
        report.recommendations.protection_factor
    );
    for action in &report.recommendations.actions {
        println!("- {action}");
    }

    Ok(())
}
