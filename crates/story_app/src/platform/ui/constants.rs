pub const APP_TITLE: &str = "My Hacker Stories";
pub const SEARCH_LABEL: &str = "Search:";
pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Something went wrong...";

pub const CMD_SEARCH: &str = "/search";
pub const CMD_DISMISS: &str = "/dismiss";
pub const CMD_CLEAR: &str = "/clear";
pub const CMD_TERM: &str = "/term";
pub const CMD_HELP: &str = "/help";
pub const CMD_QUIT: &str = "/quit";

pub const HELP_TEXT: &str = "\
Type text to change the search term (titles are filtered as you type).
  <empty line> | /search   submit the search to the server
  /dismiss N               dismiss story number N
  /clear                   empty the search term
  /term TEXT               set the search term verbatim, e.g. a term starting with /
  /help                    show this help
  /quit                    exit";

pub const RULE_WIDTH: usize = 60;
