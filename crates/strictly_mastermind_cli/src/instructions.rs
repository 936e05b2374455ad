//! Welcome banner and rules text.

use strictly_mastermind::GameConfig;

/// First line printed when a game starts.
pub const WELCOME: &str = "Welcome to Mastermind!";

/// Rules of the game, phrased for the given configuration.
pub fn instructions(config: &GameConfig) -> String {
    let pins = config.pins();
    let colors = config.colors();
    format!(
        "\n\
Mastermind is a code-breaking puzzle. One side, the codemaker, picks a secret\n\
code; the other side, the codebreaker, tries to find it.\n\
\n\
As codebreaker you face a secret of {pins} digits, each from 1 to {colors}.\n\
Digits may repeat. Type a guess as {pins} digits (spaces and commas are ignored).\n\
\n\
After each guess you are told how many digits are correct and in the correct\n\
position, and how many more are correct but in the wrong position. Each digit\n\
of the secret is counted at most once.\n\
\n\
For example, if the secret is (3, 4, 5, 5) and you guess (1, 5, 4, 5), you have\n\
1 digit correct and in the correct position (the last 5), and 2 digits correct\n\
but in the wrong position (the 4 and the other 5).\n\
\n\
You have {tries} tries. Good luck and have fun!\n",
        tries = config.max_tries(),
    )
}
