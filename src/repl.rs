//! stdin event loop: each line is a form submission or a tab click.
//!
//! Submissions run on their own tasks so the loop keeps reading input and
//! watching Ctrl+C while a question is in flight.

use std::future::Future;
use std::io;
use std::sync::Arc;

use colored::Colorize;
use qa_client::QaApi;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};
use ui_controller::{SubmitOutcome, UiController, UiEvent, View};

const NOT_READY_NOTICE: &str = "The server is not ready or a question is in progress; please wait.";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Help,
    Quit,
}

impl Command {
    /// `:tab <id>`, `:help`, `:quit`; anything else is question text.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.split_once(char::is_whitespace) {
            Some((":tab", id)) => Command::Event(UiEvent::TabClicked(id.trim().to_string())),
            _ => match trimmed {
                ":q" | ":quit" | ":exit" => Command::Quit,
                ":h" | ":help" => Command::Help,
                _ => Command::Event(UiEvent::Submit(line.to_string())),
            },
        }
    }
}

fn print_help() {
    println!(
        "{}\n  <question>      ask the documents\n  :tab <id>       show answer | sources | metrics\n  :help           this text\n  :quit           exit",
        "Commands".bold()
    );
}

fn report(outcome: SubmitOutcome) {
    if outcome == SubmitOutcome::Rejected {
        eprintln!("{}", NOT_READY_NOTICE.yellow());
    }
}

fn reap(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        if !e.is_cancelled() {
            warn!(error = %e, "submission task failed");
        }
    }
}

/// Reads commands from stdin until EOF, `:quit` or Ctrl+C.
pub async fn run<A, V>(controller: &Arc<UiController<A, V>>) -> io::Result<()>
where
    A: QaApi + 'static,
    V: View + 'static,
{
    print_help();
    let input = BufReader::new(tokio::io::stdin());
    serve(controller, input, signal::ctrl_c()).await
}

/// Event loop over any line source; `shutdown` resolving ends it at once.
///
/// `:quit` and `shutdown` cancel a submission in flight. EOF lets it finish.
async fn serve<A, V, R, S>(
    controller: &Arc<UiController<A, V>>,
    input: R,
    shutdown: S,
) -> io::Result<()>
where
    A: QaApi + 'static,
    V: View + 'static,
    R: AsyncBufRead + Unpin,
    S: Future<Output = io::Result<()>>,
{
    let mut lines = input.lines();
    let mut inflight: JoinSet<()> = JoinSet::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                debug!("interrupted");
                inflight.shutdown().await;
                return Ok(());
            }
            Some(joined) = inflight.join_next(), if !inflight.is_empty() => reap(joined),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    break;
                };
                match Command::parse(&line) {
                    Command::Quit => {
                        inflight.shutdown().await;
                        return Ok(());
                    }
                    Command::Help => print_help(),
                    Command::Event(UiEvent::TabClicked(id)) => {
                        if !controller.select_tab(&id) {
                            eprintln!("unknown tab: {id}");
                        }
                    }
                    Command::Event(UiEvent::Submit(raw)) => {
                        let controller = Arc::clone(controller);
                        inflight.spawn(async move { report(controller.submit(&raw).await) });
                    }
                }
            }
        }
    }

    // Input is gone; let a pending answer arrive unless interrupted.
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                inflight.shutdown().await;
                return Ok(());
            }
            joined = inflight.join_next() => match joined {
                Some(joined) => reap(joined),
                None => return Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use qa_client::error_handler::Result as QaResult;
    use qa_client::{AnswerResult, ApiError, Question, StatusReport};
    use tokio::io::AsyncWriteExt;
    use ui_controller::{ASK_FAILED_ALERT, DEFAULT_TABS, PageModel, TabSet};

    use super::*;

    const ASK_TIME: Duration = Duration::from_secs(10);

    /// Ready server whose answers take `ASK_TIME` and then fail.
    #[derive(Default)]
    struct SlowServer {
        asked: AtomicUsize,
    }

    impl QaApi for SlowServer {
        async fn status(&self) -> QaResult<StatusReport> {
            Ok(StatusReport {
                status: "ready".into(),
                document_count: 1,
            })
        }

        async fn ask(&self, _question: &Question) -> QaResult<AnswerResult> {
            self.asked.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(ASK_TIME).await;
            Err(ApiError::Decode {
                url: "http://slow/ask".into(),
                reason: "too slow".into(),
            }
            .into())
        }
    }

    async fn ready(api: &Arc<SlowServer>) -> Arc<UiController<Arc<SlowServer>, PageModel>> {
        let ui = Arc::new(UiController::new(
            Arc::clone(api),
            PageModel::default(),
            TabSet::new(DEFAULT_TABS).unwrap(),
            Duration::from_secs(5),
        ));
        ui.run_polling().await;
        assert!(ui.submit_enabled());
        ui
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse("  :q "), Command::Quit);
        assert_eq!(Command::parse(":help"), Command::Help);
        assert_eq!(
            Command::parse(":tab  sources "),
            Command::Event(UiEvent::TabClicked("sources".into()))
        );
    }

    #[test]
    fn other_lines_are_questions_verbatim() {
        assert_eq!(
            Command::parse("  what is :tab? "),
            Command::Event(UiEvent::Submit("  what is :tab? ".into()))
        );
        assert_eq!(Command::parse(""), Command::Event(UiEvent::Submit(String::new())));
    }

    #[tokio::test(start_paused = true)]
    async fn input_during_a_request_is_rejected_not_queued() {
        colored::control::set_override(false);
        let api = Arc::new(SlowServer::default());
        let ui = ready(&api).await;

        let input: &[u8] = b"first\nsecond\n:tab metrics\n";
        serve(&ui, input, std::future::pending()).await.unwrap();

        assert_eq!(api.asked.load(Ordering::SeqCst), 1);
        let page = ui.with_view(|v| v.clone());
        assert_eq!(page.alerts, vec![ASK_FAILED_ALERT.to_string()]);
        assert_eq!(page.active_tab.as_deref(), Some("metrics"));
        assert!(page.loading_hidden);
        assert!(!page.submit_btn_disabled);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_interrupts_a_request_in_flight() {
        let api = Arc::new(SlowServer::default());
        let ui = ready(&api).await;

        let (mut tx, rx) = tokio::io::duplex(64);
        tx.write_all(b"first\n").await.unwrap();

        let started = tokio::time::Instant::now();
        let shutdown = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(())
        };
        serve(&ui, BufReader::new(rx), shutdown).await.unwrap();

        assert!(started.elapsed() < ASK_TIME, "{:?}", started.elapsed());
        assert_eq!(api.asked.load(Ordering::SeqCst), 1);
        let page = ui.with_view(|v| v.clone());
        assert!(page.alerts.is_empty());
        assert!(page.loading_hidden);
        assert!(!page.submit_btn_disabled);
        drop(tx);
    }
}
