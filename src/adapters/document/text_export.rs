//! Plain-text export of the commitment memo.
//!
//! Section presence and ordering are the contract; exact whitespace is
//! not. Sections: Problem Statement, Frameworks Applied, Key Insights,
//! Micro-Bet, First Domino, Contingency Plans, Review Date.

use crate::domain::artifacts::CommitmentMemo;

/// Renders the memo as a titled plain-text document.
pub fn render_memo(memo: &CommitmentMemo, title: &str) -> String {
    let mut doc = String::new();

    doc.push_str(title);
    doc.push('\n');
    doc.push_str(&"=".repeat(title.len().max(8)));
    doc.push_str("\n\n");

    section(&mut doc, "Problem Statement");
    doc.push_str(&memo.problem_statement);
    doc.push_str("\n\n");

    section(&mut doc, "Frameworks Applied");
    if memo.chosen_frameworks.is_empty() {
        doc.push_str("(none selected)\n");
    } else {
        for framework in &memo.chosen_frameworks {
            doc.push_str(&format!("- {}\n", framework));
        }
    }
    doc.push('\n');

    section(&mut doc, "Key Insights");
    for insight in &memo.key_insights {
        doc.push_str(&format!("- {}\n", insight));
    }
    doc.push('\n');

    section(&mut doc, "Micro-Bet");
    doc.push_str(&format!("{}\n", memo.micro_bet.description));
    doc.push_str(&format!("Timeframe: {}\n", memo.micro_bet.timeframe));
    doc.push_str("Success metrics:\n");
    for metric in &memo.micro_bet.success_metrics {
        doc.push_str(&format!("- {}\n", metric));
    }
    doc.push('\n');

    section(&mut doc, "First Domino");
    doc.push_str(&format!("Action: {}\n", memo.first_domino.action));
    doc.push_str(&format!(
        "Deadline: {}\n",
        memo.first_domino.deadline.format_date()
    ));
    doc.push_str(&format!("Responsible: {}\n\n", memo.first_domino.responsible));

    section(&mut doc, "Contingency Plans");
    for plan in &memo.contingency_plans {
        doc.push_str(&format!("- {}\n", plan));
    }
    doc.push('\n');

    section(&mut doc, "Review Date");
    doc.push_str(&memo.review_date.format_date());
    doc.push('\n');

    doc
}

fn section(doc: &mut String, heading: &str) {
    doc.push_str(heading);
    doc.push('\n');
    doc.push_str(&"-".repeat(heading.len()));
    doc.push('\n');
}
