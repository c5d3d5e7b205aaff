fn main() {
    chroma_auth_frontend::start();
}
