fn main() -> anyhow::Result<()> {
    depviz_lib::main()
}
