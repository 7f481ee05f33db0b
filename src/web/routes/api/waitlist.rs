use axum::{extract::State, Json};
use tracing::info;

use crate::{
    web::{
        types::{DeserSignup, SignupResponse, ValidSignup, WaitlistCount},
        WebResult,
    },
    AppState,
};

// ###################################
// ->   API
// ###################################
#[tracing::instrument(
    name = "Adding a new signup to the waitlist",
    skip(app_state, signup),
    fields(
        signup_email = %signup.email,
        signup_source = ?signup.source
    )
)]
pub async fn join_waitlist(
    State(app_state): State<AppState>,
    Json(signup): Json<DeserSignup>,
) -> WebResult<Json<SignupResponse>> {
    let ValidSignup { email, source } = ValidSignup::try_from(signup)?;

    let signup = app_state.model_mgr.waitlist().register(email, source)?;
    info!("SUCCESS");

    Ok(Json(signup.into()))
}

#[tracing::instrument(name = "Counting waitlist signups", skip(app_state))]
pub async fn waitlist_count(State(app_state): State<AppState>) -> Json<WaitlistCount> {
    let count = app_state.model_mgr.waitlist().count();

    Json(WaitlistCount {
        count,
        status: "ok",
    })
}
