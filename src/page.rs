//! HTML rendering for the form page. Classification lives in `service`;
//! this module only maps a finished outcome onto markup.

use crate::service::{Prediction, ProductivityLabel};

/// What the submit handler produced for embedding into the page.
pub enum PageOutcome {
    Result(Prediction),
    Failure(String),
}

/// Result-panel styling derived from the label, kept separate from the
/// markup so classification never inspects rendered text.
pub struct LabelStyle {
    pub panel: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
}

pub fn label_style(label: ProductivityLabel) -> LabelStyle {
    match label {
        ProductivityLabel::HighlyProductive => LabelStyle {
            panel: "bg-green-100 border-green-500",
            heading: "text-green-800",
            text: "text-green-700",
        },
        ProductivityLabel::Medium => LabelStyle {
            panel: "bg-yellow-100 border-yellow-500",
            heading: "text-yellow-800",
            text: "text-yellow-700",
        },
        ProductivityLabel::Low => LabelStyle {
            panel: "bg-red-100 border-red-500",
            heading: "text-red-800",
            text: "text-red-700",
        },
    }
}

const ERROR_STYLE: LabelStyle = LabelStyle {
    panel: "bg-red-100 border-red-500",
    heading: "text-red-800",
    text: "text-red-700",
};

/// Render the full page, with the result panel filled in when a submission
/// produced an outcome.
pub fn render(outcome: Option<&PageOutcome>) -> String {
    let panel = match outcome {
        None => String::new(),
        Some(PageOutcome::Result(prediction)) => {
            let message = format!(
                "{} (Actual Predicted Score: {})",
                prediction.label.sentence(),
                prediction.score
            );
            result_panel(&label_style(prediction.label), &message)
        }
        Some(PageOutcome::Failure(message)) => result_panel(&ERROR_STYLE, message),
    };
    PAGE_TEMPLATE.replace("<!-- result -->", &panel)
}

fn result_panel(style: &LabelStyle, message: &str) -> String {
    format!(
        r#"<div class="mt-10 text-center p-6 rounded-lg {} border-l-4">
                <h2 class="text-2xl font-semibold {}">Prediction Result</h2>
                <p class="text-lg mt-2 {}">{}</p>
            </div>"#,
        style.panel,
        style.heading,
        style.text,
        escape(message),
    )
}

// Messages can carry raw form input (error details), so they are escaped
// before landing in the document.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Employee Productivity Prediction</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');
        body { font-family: 'Inter', sans-serif; }
    </style>
</head>
<body class="bg-gray-100 text-gray-800">
    <div class="container mx-auto p-4 md:p-8 max-w-4xl">
        <div class="bg-white rounded-2xl shadow-lg p-8">
            <h1 class="text-3xl md:text-4xl font-bold text-center text-gray-900 mb-2">Employee Productivity Predictor</h1>
            <p class="text-center text-gray-500 mb-8">Enter the employee's details to predict their productivity level.</p>

            <form action="/" method="post">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <label for="quarter" class="block text-sm font-medium text-gray-700">Quarter</label>
                        <select name="quarter" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3">
                            <option value="Quarter1">Quarter 1</option>
                            <option value="Quarter2">Quarter 2</option>
                            <option value="Quarter3">Quarter 3</option>
                            <option value="Quarter4">Quarter 4</option>
                            <option value="Quarter5">Quarter 5</option>
                        </select>
                    </div>
                    <div>
                        <label for="department" class="block text-sm font-medium text-gray-700">Department</label>
                        <select name="department" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3">
                            <option value="sewing">Sewing</option>
                            <option value="finishing">Finishing</option>
                        </select>
                    </div>
                    <div>
                        <label for="day" class="block text-sm font-medium text-gray-700">Day of the Week</label>
                        <select name="day" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3">
                            <option value="Monday">Monday</option>
                            <option value="Tuesday">Tuesday</option>
                            <option value="Wednesday">Wednesday</option>
                            <option value="Thursday">Thursday</option>
                            <option value="Saturday">Saturday</option>
                            <option value="Sunday">Sunday</option>
                        </select>
                    </div>
                    <div>
                        <label for="month" class="block text-sm font-medium text-gray-700">Month</label>
                        <input type="number" name="month" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" placeholder="e.g., 1 for January">
                    </div>
                    <div>
                        <label for="team" class="block text-sm font-medium text-gray-700">Team Number</label>
                        <input type="number" name="team" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" placeholder="e.g., 8">
                    </div>
                    <div>
                        <label for="targeted_productivity" class="block text-sm font-medium text-gray-700">Targeted Productivity</label>
                        <input type="number" step="0.01" name="targeted_productivity" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" placeholder="e.g., 0.80">
                    </div>
                    <div>
                        <label for="smv" class="block text-sm font-medium text-gray-700">Standard Minute Value (SMV)</label>
                        <input type="number" step="0.01" name="smv" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" placeholder="e.g., 26.16">
                    </div>
                    <div>
                        <label for="no_of_workers" class="block text-sm font-medium text-gray-700">Number of Workers</label>
                        <input type="number" step="0.1" name="no_of_workers" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" placeholder="e.g., 59.0">
                    </div>
                    <div class="md:col-span-2 grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div>
                            <label for="over_time" class="block text-sm font-medium text-gray-700">Over Time (mins)</label>
                            <input type="number" name="over_time" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" placeholder="e.g., 7080">
                        </div>
                        <div>
                            <label for="incentive" class="block text-sm font-medium text-gray-700">Incentive (BDT)</label>
                            <input type="number" name="incentive" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" placeholder="e.g., 98">
                        </div>
                        <div>
                            <label for="idle_time" class="block text-sm font-medium text-gray-700">Idle Time (hours)</label>
                            <input type="number" step="0.1" name="idle_time" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" value="0">
                        </div>
                        <div>
                            <label for="idle_men" class="block text-sm font-medium text-gray-700">Idle Men</label>
                            <input type="number" name="idle_men" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" value="0">
                        </div>
                        <div>
                            <label for="no_of_style_change" class="block text-sm font-medium text-gray-700">Style Changes</label>
                            <input type="number" name="no_of_style_change" required class="mt-1 block w-full bg-gray-50 border border-gray-300 rounded-lg shadow-sm p-3" value="0">
                        </div>
                    </div>
                </div>

                <div class="mt-8">
                    <button type="submit" class="w-full bg-indigo-600 hover:bg-indigo-700 text-white font-bold py-3 px-4 rounded-lg shadow-md">
                        Predict Productivity
                    </button>
                </div>
            </form>

            <!-- result -->
        </div>
    </div>
</body>
</html>
"#;
