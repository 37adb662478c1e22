use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use env_logger::Env;
use ffmpeg_formats::{format_list, parameters_for, ConfigError, Format, FormatRequest};
use rustop::opts;
use serde::Serialize;

#[derive(Serialize)]
struct FormatInfo {
    name: &'static str,
    ffmpeg_name: &'static str,
    description: &'static str,
}

fn main() -> ExitCode {
    let (args, _rest) = opts! {
        synopsis "Build ffmpeg output format arguments from a JSON request";
        opt list:bool=false, desc:"List supported formats and exit.";
        opt json:bool=false, desc:"Print output as JSON.";
        opt config:Option<String>, desc:"Read the request from a JSON file.";
        param request:Option<String>, desc:"Inline JSON request ('-' or omitted reads stdin)";
    }.parse_or_exit();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if args.list {
        return print_formats(args.json);
    }

    let request = match load_request(args.config, args.request) {
        Ok(request) => request,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        },
    };
    log::info!("building parameters for format {:?}", request.format());

    match parameters_for(&request) {
        Ok(parameters) => {
            if args.json {
                match serde_json::to_string(&parameters) {
                    Ok(s) => println!("{}", s),
                    Err(err) => {
                        log::error!("{}", err);
                        return ExitCode::FAILURE;
                    },
                }
            } else {
                println!("{}", parameters.join(" "));
            }
            ExitCode::SUCCESS
        },
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        },
    }
}

fn load_request(config: Option<String>, inline: Option<String>) -> Result<FormatRequest, ConfigError> {
    match (config, inline) {
        (Some(path), _) => FormatRequest::from_path(&PathBuf::from(path)),
        (None, Some(json)) if json != "-" => FormatRequest::from_json_str(&json),
        _ => {
            log::debug!("reading request from stdin");
            FormatRequest::from_reader(io::stdin().lock())
        },
    }
}

fn print_formats(json: bool) -> ExitCode {
    let infos: Vec<FormatInfo> = format_list()
        .iter()
        .map(|f| FormatInfo {
            name: f.name(),
            ffmpeg_name: f.ffmpeg_name(),
            description: f.description(),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&infos) {
            Ok(s) => println!("{}", s),
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            },
        }
    } else {
        for info in infos {
            println!("{:<8} {:<9} {}", info.name, info.ffmpeg_name, info.description);
        }
    }
    ExitCode::SUCCESS
}
