use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    auth::LoginArgs, color::Color, decode::DecodeArgs, render::Output, request::RequestArgs,
};

pub const SERVER_ENV: &str = "SESAME_SERVER";

#[derive(Parser, Clone)]
#[command(name = "Sesame CLI", version, about = "Sesame CLI", long_about = None)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::JSON)]
    pub output: Output,

    #[arg(short = 'c', long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    #[arg(
        short = 's',
        long,
        global = true,
        env = SERVER_ENV,
        help = "Base URL of the API, e.g. http://localhost:8000/api"
    )]
    pub server: Option<String>,

    #[arg(long, global = true, help = "JSON file with client settings.")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Request timeout in seconds.")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(long_about = "Log in with a username and password.")]
    Login(LoginArgs),

    #[command(long_about = "Send a request to the API, logging in first when a username is given.")]
    Request(RequestArgs),

    #[command(long_about = "Print the header and payload claims of a token. Nothing is verified.")]
    Decode(DecodeArgs),
}
