#[actix_web::main]
async fn main() -> std::io::Result<()> {
    racun_server::run().await
}
