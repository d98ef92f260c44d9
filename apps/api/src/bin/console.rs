//! Interactive console — chat with the executive persona without the HTTP
//! surface. Conversation history lives in memory for the session only; a
//! failed exchange prints the error and the loop continues.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use api::advisor::{Conversation, PromptComposer};
use api::config::Config;
use api::llm_client::{self, Role};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    let llm = llm_client::from_config(&config);
    let composer = PromptComposer::new(&config);

    println!("{}", "=".repeat(60));
    println!("FREDRICK - Executive AI Console");
    println!("{}", "=".repeat(60));
    println!("Organization: {}", config.org_name);
    println!("Model: {}", llm.model());
    println!("Risk Tolerance: {}", config.risk_tolerance);
    println!("\nType 'clear' to reset history, 'exit' to quit\n");

    let mut session = Conversation::new();
    let stdin = io::stdin();

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "exit" | "quit") {
            break;
        }
        if input == "clear" {
            session.clear();
            println!("(conversation history cleared)\n");
            continue;
        }

        let prompt = composer.chat(input, None);
        let messages = session.outbound(&prompt.system, &prompt.user);

        match llm.complete(&messages).await {
            Ok(reply) => {
                // Record the composed user message, not the raw line, so
                // history stays identical to what was sent.
                session.push(Role::User, prompt.user);
                session.push(Role::Assistant, reply.as_str());
                println!("\nFREDRICK: {reply}\n");
            }
            Err(e) => {
                // One failed exchange should not end the session
                println!("\nError: {e}\n");
            }
        }
    }

    Ok(())
}
