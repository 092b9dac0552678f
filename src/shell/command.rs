//! Text command parsing
//!
//! A command line is a keyword followed by whitespace-separated arguments.
//! Double quotes group words into one argument, so playlist names and
//! search terms may contain spaces.

use thiserror::Error;

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: String },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands. ({0})")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unterminated quote in command")]
    UnterminatedQuote,
}

/// Help text listing every command
pub const HELP: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all video from the playlist with a given name.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist with a given name.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens = tokenize(line)?;
    let Some((keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match keyword.to_uppercase().as_str() {
        "NUMBER_OF_VIDEOS" => no_args(args, "NUMBER_OF_VIDEOS", Command::NumberOfVideos)?,
        "SHOW_ALL_VIDEOS" => no_args(args, "SHOW_ALL_VIDEOS", Command::ShowAllVideos)?,
        "PLAY" => Command::Play(one_arg(args, "PLAY <video_id>")?),
        "PLAY_RANDOM" => no_args(args, "PLAY_RANDOM", Command::PlayRandom)?,
        "STOP" => no_args(args, "STOP", Command::Stop)?,
        "PAUSE" => no_args(args, "PAUSE", Command::Pause)?,
        "CONTINUE" => no_args(args, "CONTINUE", Command::Continue)?,
        "SHOW_PLAYING" => no_args(args, "SHOW_PLAYING", Command::ShowPlaying)?,
        "CREATE_PLAYLIST" => {
            Command::CreatePlaylist(one_arg(args, "CREATE_PLAYLIST <playlist_name>")?)
        }
        "ADD_TO_PLAYLIST" => {
            let (playlist, video_id) =
                two_args(args, "ADD_TO_PLAYLIST <playlist_name> <video_id>")?;
            Command::AddToPlaylist { playlist, video_id }
        }
        "REMOVE_FROM_PLAYLIST" => {
            let (playlist, video_id) =
                two_args(args, "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>")?;
            Command::RemoveFromPlaylist { playlist, video_id }
        }
        "CLEAR_PLAYLIST" => Command::ClearPlaylist(one_arg(args, "CLEAR_PLAYLIST <playlist_name>")?),
        "DELETE_PLAYLIST" => {
            Command::DeletePlaylist(one_arg(args, "DELETE_PLAYLIST <playlist_name>")?)
        }
        "SHOW_PLAYLIST" => Command::ShowPlaylist(one_arg(args, "SHOW_PLAYLIST <playlist_name>")?),
        "SHOW_ALL_PLAYLISTS" => no_args(args, "SHOW_ALL_PLAYLISTS", Command::ShowAllPlaylists)?,
        "SEARCH_VIDEOS" => Command::SearchVideos(one_arg(args, "SEARCH_VIDEOS <search_term>")?),
        "SEARCH_VIDEOS_WITH_TAG" => {
            Command::SearchVideosWithTag(one_arg(args, "SEARCH_VIDEOS_WITH_TAG <tag_name>")?)
        }
        "FLAG_VIDEO" => match args.split_first() {
            Some((video_id, reason)) => Command::FlagVideo {
                video_id: video_id.clone(),
                reason: reason.join(" "),
            },
            None => return Err(CommandError::Usage("FLAG_VIDEO <video_id> [flag_reason]")),
        },
        "ALLOW_VIDEO" => Command::AllowVideo(one_arg(args, "ALLOW_VIDEO <video_id>")?),
        "HELP" => Command::Help,
        "EXIT" => Command::Exit,
        _ => return Err(CommandError::Unknown(keyword.clone())),
    };

    Ok(Some(command))
}

fn no_args(args: &[String], usage: &'static str, command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage(usage))
    }
}

fn one_arg(args: &[String], usage: &'static str) -> Result<String, CommandError> {
    match args {
        [arg] => Ok(arg.clone()),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn two_args(args: &[String], usage: &'static str) -> Result<(String, String), CommandError> {
    match args {
        [first, second] => Ok((first.clone(), second.clone())),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// Split on whitespace, keeping double-quoted runs together
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(
            tokenize(r#"ADD_TO_PLAYLIST "My List"  v1"#).unwrap(),
            vec!["ADD_TO_PLAYLIST", "My List", "v1"]
        );
        assert_eq!(tokenize(r#"x """#).unwrap(), vec!["x", ""]);
        assert_eq!(tokenize(r#"x "open"#), Err(CommandError::UnterminatedQuote));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_keyword_case_insensitive() {
        assert_eq!(
            parse_command("play v1").unwrap(),
            Some(Command::Play("v1".to_string()))
        );
        assert_eq!(parse_command("Exit").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_two_argument_commands() {
        assert_eq!(
            parse_command("REMOVE_FROM_PLAYLIST mix v2").unwrap(),
            Some(Command::RemoveFromPlaylist {
                playlist: "mix".to_string(),
                video_id: "v2".to_string(),
            })
        );
        assert_eq!(
            parse_command("ADD_TO_PLAYLIST mix"),
            Err(CommandError::Usage("ADD_TO_PLAYLIST <playlist_name> <video_id>"))
        );
    }

    #[test]
    fn test_flag_reason_optional() {
        assert_eq!(
            parse_command("FLAG_VIDEO v1").unwrap(),
            Some(Command::FlagVideo {
                video_id: "v1".to_string(),
                reason: String::new(),
            })
        );
        assert_eq!(
            parse_command("FLAG_VIDEO v1 not for kids").unwrap(),
            Some(Command::FlagVideo {
                video_id: "v1".to_string(),
                reason: "not for kids".to_string(),
            })
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_command("DANCE"),
            Err(CommandError::Unknown("DANCE".to_string()))
        );
        assert_eq!(parse_command("STOP now"), Err(CommandError::Usage("STOP")));
        assert_eq!(
            parse_command("PLAY").unwrap_err().to_string(),
            "Usage: PLAY <video_id>"
        );
    }
}
