use axum::Json;
use serde_json::{json, Value};

/// GET /api/v1/meta
/// Static page copy (title, tagline, footer credits) so every frontend
/// renders the same chrome without hardcoding it.
pub async fn meta_handler() -> Json<Value> {
    Json(json!({
        "title": "ResuMate: Resume vs Job Description",
        "tagline": "Upload your resume and paste a job description below. \
                    We'll give you tailored feedback to help you improve your chances.",
        "footer": {
            "author": "Gericho Miranda",
            "links": [
                {"label": "LinkedIn", "url": "https://www.linkedin.com/in/gericho-miranda/"},
                {"label": "GitHub", "url": "https://github.com/GerichoMiranda"}
            ]
        }
    }))
}
