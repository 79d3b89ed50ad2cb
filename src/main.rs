use langparse::{
    errors::errors::ErrorTip, parser::parser::parse, tokens::tokens::Token, MK_TOKENS,
};

fn sample_tokens() -> Vec<Token> {
    MK_TOKENS![
        (Let, "let"), (Identifier, "number"), (Equal, "="), (Int, "10"), (Eol, ";"),
        (Let, "let"), (Identifier, "total"), (Equal, "="),
        (Minus, "-"), (Identifier, "number"), (Asterisk, "*"), (Int, "2"),
        (Plus, "+"), (Int, "7"), (Eol, ";"),
        (Identifier, "total"), (GreaterThan, ">"), (Identifier, "number"), (Eol, ";"),
        (Let, "let"), (Equal, "="), (Int, "1"), (Eol, ";"),
        (Return, "return"), (Bang, "!"), (Identifier, "total"), (Eol, ";"),
    ]
}

fn main() {
    tracing_subscriber::fmt::init();

    let (parser, program) = parse(sample_tokens());

    for stmt in &program {
        println!("{}", stmt);
    }

    for error in parser.errors() {
        if let ErrorTip::None = error.get_tip() {
            println!("Error: {} at token {}", error, error.get_position());
        } else {
            println!(
                "Error: {} at token {} ({})",
                error,
                error.get_position(),
                error.get_tip()
            );
        }
    }
}
