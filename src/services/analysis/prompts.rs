//! Analysis Prompts
//!
//! Prompt templates for the two pipeline phases. Each phase instructs the
//! model to emit exactly three tagged sections; the tags double as the
//! extraction grammar.

/// Build the phase-1 prompt: project charter, product backlog and effort
/// estimation from the document text and user notes.
pub fn build_phase_one_prompt(document_text: &str, additional_notes: &str) -> String {
    format!(
        "Analyze the following requirements document and generate the first \
         set of project artifacts.\n\n\
         Requirements document:\n\
         {document_text}\n\n\
         Additional information:\n\
         {additional_notes}\n\n\
         Generate exactly these three sections, in Markdown, each wrapped in \
         its tag:\n\
         1. Project charter - objectives, scope, constraints, deliverables, \
         stakeholders\n\
         2. Product backlog - epics and user stories with acceptance criteria \
         and T-shirt size estimates\n\
         3. Effort estimation - per-story estimates with a summary table and \
         justification\n\n\
         Expected output format:\n\
         <project_charter>\n\
         # Project Charter\n\
         ...\n\
         </project_charter>\n\n\
         <product_backlog>\n\
         # Product Backlog\n\
         ...\n\
         </product_backlog>\n\n\
         <effort_estimation>\n\
         # Effort Estimation\n\
         ...\n\
         </effort_estimation>"
    )
}

/// Build the phase-2 prompt: roadmap, methodology and risk management,
/// consistent with the phase-1 output passed as context.
pub fn build_phase_two_prompt(
    document_text: &str,
    additional_notes: &str,
    phase_one_output: &str,
) -> String {
    format!(
        "Analyze the following requirements document and generate the \
         remaining project artifacts. A first analysis pass already produced \
         the project charter, product backlog and effort estimation below; \
         stay consistent with it.\n\n\
         Requirements document:\n\
         {document_text}\n\n\
         Additional information:\n\
         {additional_notes}\n\n\
         First analysis pass:\n\
         {phase_one_output}\n\n\
         Generate exactly these three sections, in Markdown, each wrapped in \
         its tag:\n\
         4. Roadmap - phases with durations, covered epics and key milestones\n\
         5. Methodology - project management approach, team organization, \
         development practices\n\
         6. Risk management - risk register with probability, impact and \
         mitigation strategies\n\n\
         Expected output format:\n\
         <roadmap>\n\
         # Roadmap\n\
         ...\n\
         </roadmap>\n\n\
         <methodology>\n\
         # Methodology\n\
         ...\n\
         </methodology>\n\n\
         <risk_management>\n\
         # Risk Management\n\
         ...\n\
         </risk_management>"
    )
}
