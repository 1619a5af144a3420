fn main() -> anyhow::Result<()> {
    pagelocalizer::run()
}
