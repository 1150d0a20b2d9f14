/// Human readable name of an HTTP status code.
///
/// Only the codes that show up in typical API logs are named; everything else
/// is reported as `Unknown Status`.
pub fn status_name(status_code: &str) -> &'static str {
    match status_code {
        "200" => "OK",
        "206" => "Partial Content",
        "304" => "Not Modified",
        "400" => "Bad Request",
        "401" => "Unauthorized",
        "404" => "Not Found",
        "422" => "Unprocessable Entity",
        "500" => "Server Error",
        _ => "Unknown Status",
    }
}
