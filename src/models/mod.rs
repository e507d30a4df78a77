// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ApplicationDetail, ApplicationStatus, JobPostDetail, MatchSuggestion, Role, UserRecord,
};
pub use requests::{
    ApplyRequest, CreateJobPostRequest, CreateUserRequest, ForgotPasswordRequest, JobListQuery,
    LoginRequest, MatchListQuery, SignupRequest, UpdateJobPostRequest, UpdateUserRequest,
    UserListQuery,
};
pub use responses::{
    AuthResponse, ErrorResponse, HealthResponse, InfoResponse, JobApplicationOut, JobPostOut,
    MessageResponse, UserOut,
};
