use crate::core::tags::Tags;
use crate::models::{CreateJobPostRequest, CreateUserRequest, Role};
use crate::services::postgres::{PostgresClient, PostgresError};
use serde_json::json;

fn tags(items: &[&str]) -> Tags {
    Tags::List(items.iter().map(ToString::to_string).collect())
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Populate an empty database with demo users, job posts, and one
/// application. A non-empty database is left untouched.
pub async fn seed_database(db: &PostgresClient) -> Result<(), PostgresError> {
    if db.count_users().await? > 0 {
        tracing::debug!("Database already populated, skipping seed");
        return Ok(());
    }

    tracing::info!("Seeding database with demo data");

    let ava = db
        .create_user(&CreateUserRequest {
            name: "Ava Chen".to_string(),
            email: text("ava@launchcircle.dev"),
            profile_photo: None,
            headline: text("Founder | Building curated talent pods"),
            bio: text("Ex-Stripe PM building better ways to match founders and operators."),
            experience: text("5+ years PM @ Stripe, led ops tooling."),
            startups: text("LaunchCircle"),
            portfolio: tags(&["https://launchcircle.dev"]),
            resume_url: text("https://example.com/resume/ava"),
            looking_for_cofounder: true,
            availability: text("full-time"),
            skills: tags(&["Product strategy", "GTM", "Fundraising"]),
            looking_for: tags(&["Full-stack engineering", "Design systems"]),
            location: text("San Francisco, CA"),
            time_zone: text("America/Los_Angeles"),
            role: Role::Founder,
            founder_type: text("product"),
            stage_preference: text("pre-seed"),
            commitment_level: text("full-time"),
            preferences: Some(json!({"work_style": "hybrid"})),
        })
        .await?;

    let leo = db
        .create_user(&CreateUserRequest {
            name: "Leo Martinez".to_string(),
            email: text("leo@launchcircle.dev"),
            profile_photo: None,
            headline: text("Hiring for AI invoicing startup"),
            bio: text("Fintech engineer turned founder focused on automating billing."),
            experience: text("7 years backend/payments."),
            startups: text("Invoice Co-Pilot"),
            portfolio: tags(&["https://invoice-copilot.com"]),
            resume_url: None,
            looking_for_cofounder: false,
            availability: text("full-time"),
            skills: tags(&["Python", "Fintech", "Data pipelines"]),
            looking_for: tags(&["Backend", "Payments"]),
            location: text("New York, NY"),
            time_zone: text("America/New_York"),
            role: Role::JobProvider,
            founder_type: text("technical"),
            stage_preference: text("seed"),
            commitment_level: text("full-time"),
            preferences: Some(json!({"availability": "full-time"})),
        })
        .await?;

    let samira = db
        .create_user(&CreateUserRequest {
            name: "Samira Patel".to_string(),
            email: text("samira@launchcircle.dev"),
            profile_photo: None,
            headline: text("Full-stack engineer, design systems nerd"),
            bio: text("Ship fast with TypeScript, React, and great UX taste."),
            experience: text("6 years frontend/full-stack."),
            startups: text("DesignOps, StudioX"),
            portfolio: tags(&["https://samira.dev"]),
            resume_url: text("https://example.com/resume/samira"),
            looking_for_cofounder: false,
            availability: text("full-time"),
            skills: tags(&["Next.js", "React", "TypeScript", "Design systems"]),
            looking_for: tags(&["Product strategy", "Design systems"]),
            location: text("Los Angeles, CA"),
            time_zone: text("America/Los_Angeles"),
            role: Role::SoftwareEngineer,
            founder_type: None,
            stage_preference: None,
            commitment_level: text("full-time"),
            preferences: Some(json!({"availability": "full-time"})),
        })
        .await?;

    db.create_user(&CreateUserRequest {
        name: "Jonah Reed".to_string(),
        email: text("jonah@launchcircle.dev"),
        profile_photo: None,
        headline: text("Backend + data infra"),
        bio: text("Enjoy hard backend problems, observability, and data streaming."),
        experience: text("5 years backend/data infra."),
        startups: text("DataPulse"),
        portfolio: tags(&["https://jonahreed.dev"]),
        resume_url: None,
        looking_for_cofounder: false,
        availability: text("part-time"),
        skills: tags(&["FastAPI", "Postgres", "Redis", "Streaming"]),
        looking_for: tags(&["Backend", "Streaming"]),
        location: text("Chicago, IL"),
        time_zone: text("America/Chicago"),
        role: Role::JobSeeker,
        founder_type: None,
        stage_preference: None,
        commitment_level: text("part-time"),
        preferences: Some(json!({"availability": "part-time"})),
    })
    .await?;

    let pods_post = db
        .create_job_post(&CreateJobPostRequest {
            title: "Founding Full-Stack Engineer".to_string(),
            headline: text("Build the talent pods experience end-to-end"),
            description: text("Ship the founder dashboard, onboarding, and matching flows."),
            role: Role::SoftwareEngineer,
            skills: tags(&["Next.js", "FastAPI"]),
            location: text("Remote"),
            time_zone: text("Flexible"),
            work_style: text("remote"),
            availability: text("full-time"),
            timeline: text("6 months"),
            compensation: text("Equity + stipend"),
            owner_id: ava.id,
        })
        .await?;

    db.create_job_post(&CreateJobPostRequest {
        title: "Backend Engineer (Payments)".to_string(),
        headline: text("Hardening payment workflows and reconciliation"),
        description: text("Own payment workflows for AI invoicing product."),
        role: Role::SoftwareEngineer,
        skills: tags(&["Python", "Postgres", "Payments"]),
        location: text("Hybrid NYC"),
        time_zone: text("America/New_York"),
        work_style: text("hybrid"),
        availability: text("full-time"),
        timeline: text("3-6 months"),
        compensation: text("$120k-$160k + equity"),
        owner_id: leo.id,
    })
    .await?;

    db.apply_to_job(
        pods_post.id,
        samira.id,
        Some("Excited to ship the pod experience, deep Next.js experience."),
    )
    .await?;

    tracing::info!("Seed data inserted");
    Ok(())
}
