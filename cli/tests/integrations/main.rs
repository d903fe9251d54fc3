mod repl;
mod run;
