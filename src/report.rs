//! Text rendering of analysis results.

use std::fmt::Write;

use crate::analysis::AnalysisResult;

/// Render the displacement and stress tables.
///
/// Nodes and elements are numbered from one in the order they appear in the
/// result. The stress table has one row fewer than the model has elements.
#[must_use]
pub fn render(result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str("Displacements: \t   x\t\t\ty\n");
    for (index, [x, y]) in result.nodal.iter().enumerate() {
        writeln!(&mut output, "Node {:4}: {x:12.6} {y:12.6}", index + 1)
            .expect("writing to string cannot fail");
    }

    output.push_str("\nStresses:\t\t   Stress_x\t\t  Stress_y  Shear stress\n");
    for (index, record) in result.stresses.iter().enumerate() {
        writeln!(
            &mut output,
            "Element {:4}: {:12.6} | {:12.6} | {:12.6}",
            index + 1,
            record.axial,
            record.transverse,
            record.shear
        )
        .expect("writing to string cannot fail");
    }

    output
}
