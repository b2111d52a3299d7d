use crate::models::{Adjustments, DailyEntry, WorkerSummary};
use std::time::Duration;

const MODEL: &str = "gemini-2.5-flash";

const SYSTEM_INSTRUCTION: &str = "You are a helpful payroll data analyst for a tailoring business. \
You will be given payroll data in JSON format for a specific month. The final salary for a worker is \
calculated by adding their piecework salary to their base salary and then subtracting any advances. \
Answer the user's questions based ONLY on the provided data. Format your answers clearly and \
concisely. If the data is empty, inform the user they need to add entries first. All monetary values \
are in the business's local currency. Your response should be in the same language as the user's \
question.";

/// Everything the analyst is allowed to see for one question.
pub struct Snapshot {
    pub month: String,
    pub adjustments: Adjustments,
    pub summary: Vec<WorkerSummary>,
    pub entries: Vec<DailyEntry>,
}

impl Snapshot {
    /// Lay the data out section by section ahead of the question.
    fn prompt(&self, question: &str) -> Result<String, String> {
        let base_salaries =
            serde_json::to_string(&self.adjustments.base_salaries).map_err(|e| e.to_string())?;
        let advances =
            serde_json::to_string(&self.adjustments.advances).map_err(|e| e.to_string())?;
        let summary = serde_json::to_string(&self.summary).map_err(|e| e.to_string())?;
        let entries = serde_json::to_string(&self.entries).map_err(|e| e.to_string())?;

        Ok(format!(
            "The data is for the month: {}.\n\n\
             Workers' Base Salaries (monthly):\n{}\n\n\
             Workers' Advances/Deductions (for this month):\n{}\n\n\
             Monthly Summary Data (The 'totalSalary' field represents piecework salary, and \
             'finalSalary' is the sum of piecework and base salary minus advances):\n{}\n\n\
             Daily Entries Data (This contributes to the piecework salary):\n{}\n\n\
             User question: {}",
            self.month, base_salaries, advances, summary, entries, question
        ))
    }
}

/// Ask the model one question against the snapshot. The key comes from the
/// GEMINI_API_KEY environment variable.
pub async fn ask(snapshot: &Snapshot, question: &str) -> Result<String, String> {
    let api_key =
        std::env::var("GEMINI_API_KEY").map_err(|_| "GEMINI_API_KEY is not set".to_string())?;

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent?key={}",
        api_key.trim()
    );

    let body = serde_json::json!({
        "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
        "contents": [{ "parts": [{ "text": snapshot.prompt(question)? }] }],
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| format!("HTTP client error: {e}"))?;

    let resp = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("AI request failed: {e}"))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(format!("AI error ({status}): {body}"));
    }

    let json: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| format!("AI JSON parse error: {e}"))?;

    json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|text| text.trim().to_string())
        .ok_or_else(|| "AI returned an empty response".to_string())
}
