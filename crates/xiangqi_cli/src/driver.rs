//! The line protocol spoken on stdin/stdout.
//!
//! One command per line, one or more response lines per command:
//!
//! ```text
//! move 6,0 5,0      ->  ok P9+1
//! moves 9,1         ->  moves (7,0) (7,2) (8,3)
//! status            ->  turn black
//! resign            ->  over red
//! ```

use std::io::Write;

use anyhow::Result;
use tracing::{debug, warn};
use xiangqi_core::{Move, MoveError, PlacementEntry, RuleConfig, Session, Square, Status};

pub struct Driver {
    config: RuleConfig,
    placement: Option<Vec<PlacementEntry>>,
    session: Session,
}

impl Driver {
    pub fn new(config: RuleConfig, placement: Option<Vec<PlacementEntry>>) -> Result<Self> {
        let session = start(&config, placement.as_deref())?;
        Ok(Self {
            config,
            placement,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle one input line. Returns `false` once the host asked to quit.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(true);
        };
        debug!(command, ?args, "command");

        match command {
            "new" => {
                self.session = start(&self.config, self.placement.as_deref())?;
                writeln!(out, "ok")?;
            }
            "move" => {
                let [from, to] = args else {
                    writeln!(out, "error usage: move <row>,<col> <row>,<col>")?;
                    return Ok(true);
                };
                match (from.parse::<Square>(), to.parse::<Square>()) {
                    (Ok(from), Ok(to)) => self.play(from, to, out)?,
                    (Err(e), _) | (_, Err(e)) => writeln!(out, "error {e}")?,
                }
            }
            "moves" => {
                let [from] = args else {
                    writeln!(out, "error usage: moves <row>,<col>")?;
                    return Ok(true);
                };
                match from.parse::<Square>() {
                    Ok(from) => {
                        let targets = self.session.legal_destinations(from)?;
                        write!(out, "moves")?;
                        for to in targets {
                            write!(out, " {to}")?;
                        }
                        writeln!(out)?;
                    }
                    Err(e) => writeln!(out, "error {e}")?,
                }
            }
            "status" => self.report_status(out)?,
            "board" => writeln!(out, "{}", self.session.board_snapshot())?,
            "history" => {
                for (ply, record) in self.session.history().iter().enumerate() {
                    let mv = Move::new(record.from, record.to);
                    writeln!(out, "{} {} {mv}", ply + 1, record.notation)?;
                }
                writeln!(out, "end")?;
            }
            "resign" => match self.session.resign() {
                Ok(_) => self.report_status(out)?,
                Err(reason) => writeln!(out, "rejected {reason}")?,
            },
            "draw" => match self.session.agree_draw() {
                Ok(_) => self.report_status(out)?,
                Err(reason) => writeln!(out, "rejected {reason}")?,
            },
            "quit" => return Ok(false),
            other => {
                warn!(command = other, "unknown command");
                writeln!(out, "error unknown command '{other}'")?;
            }
        }
        Ok(true)
    }

    fn play(&mut self, from: Square, to: Square, out: &mut impl Write) -> Result<()> {
        match self.session.attempt_move(from, to) {
            Ok(record) => {
                writeln!(out, "ok {}", record.notation)?;
                if let Status::Over { .. } = self.session.status() {
                    self.report_status(out)?;
                }
            }
            Err(MoveError::Rejected(reason)) => writeln!(out, "rejected {reason}")?,
            Err(MoveError::Invariant(violation)) => return Err(violation.into()),
        }
        Ok(())
    }

    fn report_status(&self, out: &mut impl Write) -> Result<()> {
        match self.session.status() {
            Status::InProgress => {
                let side = self.session.side_to_move();
                if self.session.is_in_check(side)? {
                    writeln!(out, "turn {side} check")?;
                } else {
                    writeln!(out, "turn {side}")?;
                }
            }
            Status::Over {
                winner: Some(winner),
            } => writeln!(out, "over {winner}")?,
            Status::Over { winner: None } => writeln!(out, "over draw")?,
        }
        Ok(())
    }
}

fn start(config: &RuleConfig, placement: Option<&[PlacementEntry]>) -> Result<Session> {
    Ok(match placement {
        Some(entries) => Session::new(entries, config)?,
        None => Session::standard(config),
    })
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
