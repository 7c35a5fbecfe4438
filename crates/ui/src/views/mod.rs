mod dashboard;
mod home;
mod login;
mod practice;
mod session;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use login::LoginView;
pub use practice::PracticeView;
pub use session::AssessmentView;
pub use state::{ActiveSession, SignedIn};
