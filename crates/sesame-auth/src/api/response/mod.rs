mod login_success_api_response;

pub(crate) use login_success_api_response::LoginSuccessApiResponse;
