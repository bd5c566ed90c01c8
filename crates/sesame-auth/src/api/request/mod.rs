mod login_api_request;

pub(crate) use login_api_request::LoginApiRequest;
