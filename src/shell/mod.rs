//! Line-oriented command shell over a `VideoPlayer`
//!
//! Reads one command per line, prints the resulting status lines, and
//! after a search with results treats the next line as the selection.

mod command;

pub use command::{parse_command, Command, CommandError, HELP};

use crate::player::{Messages, PlayerResult, SearchResults, VideoPicker, VideoPlayer};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Drives a player from text input
pub struct Shell<'a, P: VideoPicker> {
    player: VideoPlayer<'a, P>,
    prompt: Option<String>,
}

impl<'a, P: VideoPicker> Shell<'a, P> {
    pub fn new(player: VideoPlayer<'a, P>) -> Self {
        Self {
            player,
            prompt: None,
        }
    }

    /// Print a prompt before reading each command
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn player(&self) -> &VideoPlayer<'a, P> {
        &self.player
    }

    /// Run until EXIT or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let mut lines = input.lines();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(output, "{}", prompt).context("Failed to write prompt")?;
                output.flush().context("Failed to flush output")?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read command")?;

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "{}", e).context("Failed to write output")?;
                    continue;
                }
            };

            log::debug!("Executing {:?}", command);
            if command == Command::Exit {
                break;
            }

            match command {
                Command::SearchVideos(term) => {
                    let results = self.player.search_by_title(&term);
                    self.select(results, &mut lines, &mut output)?;
                }
                Command::SearchVideosWithTag(tag) => {
                    let results = self.player.search_by_tag(&tag);
                    self.select(results, &mut lines, &mut output)?;
                }
                command => {
                    let result = self.execute(command);
                    write_result(&mut output, result)?;
                }
            }
        }

        log::debug!("Shell finished");
        Ok(())
    }

    /// Execute a command that needs no further input
    pub fn execute(&mut self, command: Command) -> PlayerResult<Messages> {
        let player = &mut self.player;
        match command {
            Command::NumberOfVideos => Ok(player.number_of_videos()),
            Command::ShowAllVideos => Ok(player.show_all_videos()),
            Command::Play(video_id) => player.play(&video_id),
            Command::PlayRandom => player.play_random(),
            Command::Stop => player.stop(),
            Command::Pause => player.pause(),
            Command::Continue => player.resume(),
            Command::ShowPlaying => Ok(player.show_playing()),
            Command::CreatePlaylist(name) => player.create_playlist(&name),
            Command::AddToPlaylist { playlist, video_id } => {
                player.add_to_playlist(&playlist, &video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                player.remove_from_playlist(&playlist, &video_id)
            }
            Command::ClearPlaylist(name) => player.clear_playlist(&name),
            Command::DeletePlaylist(name) => player.delete_playlist(&name),
            Command::ShowPlaylist(name) => player.show_playlist(&name),
            Command::ShowAllPlaylists => Ok(player.show_all_playlists()),
            Command::SearchVideos(term) => Ok(player.search_by_title(&term).lines()),
            Command::SearchVideosWithTag(tag) => Ok(player.search_by_tag(&tag).lines()),
            Command::FlagVideo { video_id, reason } => player.flag(&video_id, &reason),
            Command::AllowVideo(video_id) => player.unflag(&video_id),
            Command::Help => Ok(HELP.lines().map(str::to_string).collect()),
            Command::Exit => Ok(Messages::new()),
        }
    }

    /// Show search results and play the video picked on the next line
    fn select<I, W>(
        &mut self,
        results: SearchResults,
        lines: &mut I,
        output: &mut W,
    ) -> Result<()>
    where
        I: Iterator<Item = std::io::Result<String>>,
        W: Write,
    {
        write_lines(output, &results.lines())?;
        if results.is_empty() {
            return Ok(());
        }

        output.flush().context("Failed to flush output")?;
        let answer = match lines.next() {
            Some(line) => line.context("Failed to read selection")?,
            None => String::new(),
        };

        let result = self.player.play_search_result(&results, &answer);
        write_result(output, result)
    }
}

fn write_result<W: Write>(output: &mut W, result: PlayerResult<Messages>) -> Result<()> {
    match result {
        Ok(messages) => write_lines(output, &messages),
        Err(e) => {
            log::debug!("Operation failed: {:?}", e);
            writeln!(output, "{}", e).context("Failed to write output")
        }
    }
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(output, "{}", line).context("Failed to write output")?;
    }
    Ok(())
}
