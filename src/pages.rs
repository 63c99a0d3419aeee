const STYLE: &str = r#"
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #43cea2 0%, #185a9d 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }

        .container {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            max-width: 800px;
            width: 100%;
            padding: 40px;
        }

        h1 {
            color: #333;
            margin-bottom: 30px;
            font-size: 1.8em;
        }

        form {
            border: 3px dashed #43cea2;
            border-radius: 15px;
            padding: 40px 20px;
            text-align: center;
            background: #f6fffb;
        }

        input[type="submit"], a.button {
            display: inline-block;
            margin-top: 20px;
            background: #185a9d;
            color: white;
            border: none;
            padding: 10px 24px;
            border-radius: 20px;
            font-size: 1em;
            font-weight: 600;
            text-decoration: none;
            cursor: pointer;
        }

        table {
            width: 100%;
            border-collapse: collapse;
        }

        td {
            padding: 8px 12px;
            border-bottom: 1px solid #e0e0e0;
            color: #333;
        }
    </style>
"#;

/// Landing page: a single multipart form posting the `image` field to `/upload`.
pub fn landing() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Upload Image for Food Analysis</title>
{STYLE}</head>
<body>
    <div class="container">
        <h1>Upload an image to get the calorie breakdown</h1>
        <form action="/upload" method="post" enctype="multipart/form-data">
            <input type="file" name="image" accept="image/*" required>
            <br>
            <input type="submit" value="Upload Image">
        </form>
    </div>
</body>
</html>
"#
    )
}

/// Result page around an already-built `<table>` fragment. The fragment is
/// inserted verbatim.
pub fn result(table_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Food Analysis Result</title>
{STYLE}</head>
<body>
    <div class="container">
        <h1>Food Items and Calorie Information</h1>
        {table_html}
        <a class="button" href="/">Upload another image</a>
    </div>
</body>
</html>
"#
    )
}
