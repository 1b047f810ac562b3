use crate::ai::{
    self, timeline::DEFAULT_PROJECT_NAME, PrioritizeRequest, PrioritySuggestion, TimelineRequest,
    WorkloadRequest,
};
use actix_web::{post, web, HttpResponse, Responder};

/// Suggests a priority for a task from its text.
///
/// Scans the submitted title and description for urgency keywords and maps
/// them onto the standard three-level priority scale. Absent fields are
/// treated as empty text, so an empty body is a valid request.
///
/// ## Request Body:
/// - `title` (optional): The task title.
/// - `description` (optional): The task description.
///
/// ## Responses:
/// - `200 OK`: `{"suggestedPriority": "Low" | "Medium" | "High"}`.
/// - `400 Bad Request`: If the payload is not valid JSON.
#[post("/prioritize")]
pub async fn suggest_priority(body: web::Json<PrioritizeRequest>) -> impl Responder {
    let request = body.into_inner();
    let priority = ai::suggest_priority(
        request.title.as_deref().unwrap_or(""),
        request.description.as_deref().unwrap_or(""),
    );

    HttpResponse::Ok().json(PrioritySuggestion {
        suggested_priority: priority,
    })
}

/// Analyzes how tasks are spread across a team.
///
/// Counts tasks per supplied user, classifies everyone against the team
/// average, and recommends reassignments from overloaded to underloaded
/// members. Tasks assigned to nobody (or to someone outside `users`) are
/// ignored.
///
/// ## Request Body:
/// - `users` (optional): Array of user objects; only `name` is read.
/// - `tasks` (optional): Array of task objects; only the assignee is read,
///   from `assignee` or `Assignee`.
///
/// ## Responses:
/// - `200 OK`: Per-user analysis, reassignment recommendations,
///   `averageTasksPerUser`, and `totalTasks`. When `users` is empty the two
///   aggregate fields are omitted.
/// - `400 Bad Request`: If the payload is not valid JSON.
#[post("/workload")]
pub async fn analyze_workload(body: web::Json<WorkloadRequest>) -> impl Responder {
    let request = body.into_inner();
    let report = ai::analyze_workload(&request.users, &request.tasks);

    HttpResponse::Ok().json(report)
}

/// Forecasts when a project's remaining tasks will be done.
///
/// Tallies the submitted tasks by board column, assumes a fixed velocity of
/// two tasks per day, and projects a completion date from the current time.
/// Tasks with an unrecognized status are excluded from every figure.
///
/// ## Request Body:
/// - `tasks` (optional): Array of task objects; only the status is read,
///   from `status` or `Status`.
/// - `projectName` (optional): Label echoed back in the report; defaults to
///   `"Project"`.
///
/// ## Responses:
/// - `200 OK`: Task tallies, completion percentage, estimated days remaining,
///   predicted completion date, risk level, and the assumed velocity.
/// - `400 Bad Request`: If the payload is not valid JSON.
#[post("/predict-timeline")]
pub async fn predict_timeline(body: web::Json<TimelineRequest>) -> impl Responder {
    let request = body.into_inner();
    let project_name = request.project_name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME);
    let report = ai::forecast_timeline(&request.tasks, project_name);

    HttpResponse::Ok().json(report)
}
