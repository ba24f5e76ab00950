fn main() -> anyhow::Result<()> {
    ampulla::run()
}
