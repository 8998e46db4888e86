use cipherscope::app::App;

fn main() -> anyhow::Result<()> {
    App::init()?.execute()
}
