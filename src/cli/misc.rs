use ccg_assumptions::reports::RunReport;

pub fn examine_run_report(report: &RunReport) {
    for file in &report.files {
        println!("c Wrote {} to {:?}", file.route, file.output);
    }

    println!("c Routes written: {}", report.files.len());

    if !report.complete() {
        for error in &report.skipped {
            println!("c Skipped {error}");
        }
        println!("c Files skipped:  {}", report.skipped.len());
    }
}
