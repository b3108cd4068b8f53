//! Template banks keyed by domain.
//!
//! Summary sentences carry `{complexity}`, `{terms}` and `{topics}` slots that
//! the synthesizer fills in. Everything else is used verbatim.

use crate::brain::Domain;

/// Fixed candidate strings for one domain
pub struct TemplateBank {
    /// First three summary sentences
    pub summary: [&'static str; 3],
    /// Closing summary sentence when topics were identified
    pub summary_with_topics: &'static str,
    /// Closing summary sentence when no topic was identified
    pub summary_without_topics: &'static str,
    pub analogies: [&'static str; 3],
    pub code_example: &'static str,
    pub use_cases: [&'static str; 5],
    pub key_points: [&'static str; 5],
}

/// Filler for the `{terms}` slot when no key term was found
pub const NO_TERMS_PHRASE: &str = "its core building blocks";

/// Bank for a domain; `Generic` has its own bank and is the fallback for any
/// domain without one.
pub fn bank_for(domain: Domain) -> &'static TemplateBank {
    match domain {
        Domain::UiFramework => &UI_FRAMEWORK_BANK,
        Domain::Scripting => &SCRIPTING_BANK,
        Domain::NetworkApi => &NETWORK_API_BANK,
        Domain::Styling => &STYLING_BANK,
        Domain::Generic => &GENERIC_BANK,
    }
}

static UI_FRAMEWORK_BANK: TemplateBank = TemplateBank {
    summary: [
        "This UI framework documentation explains concepts that are essential for building modern component-based interfaces.",
        "The content covers {complexity}-level patterns including {terms}.",
        "Understanding these concepts will help you write more efficient and maintainable components.",
    ],
    summary_with_topics: "Key areas include {topics}.",
    summary_without_topics: "This covers fundamental component development patterns.",
    analogies: [
        "Think of components like LEGO blocks - each component is a reusable piece that you can combine with others to build complex structures. Props are like the connection points that let blocks share information, while state is like the internal memory that helps each block remember its current configuration.",
        "A UI framework is like a smart assistant that watches your data and automatically updates your page when anything changes. It's like having a personal secretary who immediately rewrites your presentation slides whenever you change the underlying data.",
        "Using hooks is like having a toolbox where each tool has a specific purpose. useState is your memory tool, useEffect is your scheduling assistant, and other hooks are specialized tools that help you solve specific problems.",
    ],
    code_example: r#"import React, { useState, useEffect } from 'react';

function ExampleComponent() {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(true);

  useEffect(() => {
    const fetchData = async () => {
      try {
        const response = await fetch('/api/data');
        const result = await response.json();
        setData(result);
      } catch (error) {
        console.error('Error:', error);
      } finally {
        setLoading(false);
      }
    };

    fetchData();
  }, []);

  if (loading) return <div>Loading...</div>;
  if (!data) return <div>No data found</div>;

  return (
    <div>
      <h2>{data.title}</h2>
      <p>{data.description}</p>
    </div>
  );
}"#,
    use_cases: [
        "Building interactive user interfaces with dynamic data",
        "Managing component state and handling user interactions",
        "Fetching and displaying data from APIs",
        "Creating reusable components for consistent UI patterns",
        "Implementing form handling and validation",
    ],
    key_points: [
        "Components should be pure functions that render the same output for the same props",
        "Always use the dependency array in useEffect to control when effects run",
        "State updates are asynchronous and may be batched for performance",
        "Break down complex components into smaller, focused components",
        "Use proper key props when rendering lists to help the framework optimize updates",
    ],
};

static SCRIPTING_BANK: TemplateBank = TemplateBank {
    summary: [
        "This scripting documentation covers {complexity}-level concepts including {terms}.",
        "The material explains core language functionality that's essential for modern web development.",
        "These concepts form the foundation for understanding more advanced scripting patterns.",
    ],
    summary_with_topics: "Main topics include {topics}.",
    summary_without_topics: "This focuses on essential language fundamentals.",
    analogies: [
        "Functions are like recipes in a cookbook - they take ingredients (parameters), follow specific steps, and produce a result. You can use the same recipe over and over with different ingredients to get different outcomes.",
        "Think of promises like ordering food at a restaurant. You place your order (make the request), get a receipt with a promise that your food will come (the Promise object), and then either receive your meal (resolve) or get told the kitchen is out of ingredients (reject).",
        "Closures are like a backpack that a function carries around. Even when the function travels to different parts of your code, it still has access to all the variables it packed in its backpack from where it was created.",
    ],
    code_example: r#"// Example implementation
function processData(input) {
  return new Promise((resolve, reject) => {
    // Simulate async processing
    setTimeout(() => {
      if (input && input.length > 0) {
        const result = input.map(item => ({
          ...item,
          processed: true,
          timestamp: Date.now()
        }));
        resolve(result);
      } else {
        reject(new Error('Invalid input data'));
      }
    }, 1000);
  });
}

// Usage
processData(myData)
  .then(result => console.log('Success:', result))
  .catch(error => console.error('Error:', error));"#,
    use_cases: [
        "Processing and transforming data in web applications",
        "Handling asynchronous operations and API calls",
        "Creating interactive functionality on websites",
        "Building reusable utility functions and modules",
        "Implementing business logic and data validation",
    ],
    key_points: [
        "Understand the difference between synchronous and asynchronous code execution",
        "Always handle errors properly with try-catch blocks or .catch() methods",
        "Use const and let instead of var for better scope management",
        "Functions are first-class objects and can be passed as arguments",
        "Be aware of 'this' binding context in different function types",
    ],
};

static NETWORK_API_BANK: TemplateBank = TemplateBank {
    summary: [
        "This API documentation explains how to interact with web services and handle data communication.",
        "It covers {complexity}-level concepts including {terms}.",
        "Understanding these patterns is crucial for building applications that communicate with external services.",
    ],
    summary_with_topics: "Key areas covered: {topics}.",
    summary_without_topics: "This focuses on API integration patterns.",
    analogies: [
        "APIs are like waiters in a restaurant. You (the client) tell the waiter (API) what you want from the menu (available endpoints), and the waiter goes to the kitchen (server) to get your order and brings back your food (data).",
        "Think of API endpoints like different departments in a company. Each department (endpoint) handles specific types of requests - HR for employee data, Accounting for financial data, etc. You need to know which department to contact for what you need.",
        "API authentication is like having a membership card at an exclusive club. You show your card (API key) at the door, and if it's valid, you get access to all the club's services. Without it, you're turned away.",
    ],
    code_example: r#"// API interaction example
const apiClient = {
  baseURL: 'https://api.example.com',

  async get(endpoint) {
    const response = await fetch(`${this.baseURL}${endpoint}`, {
      headers: {
        'Authorization': 'Bearer ' + getToken(),
        'Content-Type': 'application/json'
      }
    });

    if (!response.ok) {
      throw new Error(`HTTP error! status: ${response.status}`);
    }

    return response.json();
  },

  async post(endpoint, data) {
    const response = await fetch(`${this.baseURL}${endpoint}`, {
      method: 'POST',
      headers: {
        'Authorization': 'Bearer ' + getToken(),
        'Content-Type': 'application/json'
      },
      body: JSON.stringify(data)
    });

    return response.json();
  }
};

// Usage
const userData = await apiClient.get('/users/123');
const newUser = await apiClient.post('/users', { name: 'John', email: 'john@example.com' });"#,
    use_cases: [
        "Integrating third-party services into your application",
        "Building client-server communication for web apps",
        "Creating data synchronization between different systems",
        "Implementing authentication and authorization flows",
        "Handling real-time data updates and notifications",
    ],
    key_points: [
        "Always validate and sanitize data received from external APIs",
        "Implement proper error handling for network failures and timeouts",
        "Use appropriate HTTP methods (GET, POST, PUT, DELETE) for different operations",
        "Include proper authentication headers and handle token expiration",
        "Consider rate limiting and implement retry logic for failed requests",
    ],
};

static STYLING_BANK: TemplateBank = TemplateBank {
    summary: [
        "This CSS documentation explains how to control the layout and appearance of web pages.",
        "It covers {complexity}-level styling concepts including {terms}.",
        "Understanding these rules helps you build interfaces that look consistent across screens and browsers.",
    ],
    summary_with_topics: "Key areas include {topics}.",
    summary_without_topics: "This focuses on essential styling and layout techniques.",
    analogies: [
        "CSS is like the interior design plan for a house. The HTML is the structure - walls, rooms and doors - while the stylesheet decides the paint colors, furniture placement and lighting in every room.",
        "Selectors work like mailing labels. Each rule is a package of styles, and the selector on the label decides which elements receive it - a single house, a whole street, or every house in town.",
        "Responsive design is like water taking the shape of its container. Media queries let the same content pour into a phone, a tablet or a widescreen monitor and still fill the space sensibly.",
    ],
    code_example: r#"/* Responsive card layout */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.card {
  padding: 1rem;
  border-radius: 8px;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
  transition: transform 0.2s ease;
}

.card:hover {
  transform: translateY(-4px);
}

@media (max-width: 600px) {
  .card-grid {
    grid-template-columns: 1fr;
  }
}"#,
    use_cases: [
        "Designing layouts that adapt to different screen sizes",
        "Creating consistent visual themes across an application",
        "Adding transitions and animations to interactive elements",
        "Building reusable utility classes for common patterns",
        "Improving readability with typography and spacing rules",
    ],
    key_points: [
        "Understand how specificity decides which rule wins when several apply",
        "Prefer flexbox and grid over floats for layout",
        "Design mobile-first and add media queries for larger screens",
        "Keep selectors short and avoid deep nesting",
        "Use custom properties (variables) for colors and spacing you reuse",
    ],
};

static GENERIC_BANK: TemplateBank = TemplateBank {
    summary: [
        "This technical documentation explains {complexity}-level concepts that are important for software development.",
        "The content covers {terms} and related topics.",
        "These concepts will help you understand and implement the described functionality effectively.",
    ],
    summary_with_topics: "Main areas include {topics}.",
    summary_without_topics: "This provides essential technical knowledge.",
    analogies: [
        "Think of this technical concept like learning to drive a car. At first, all the controls seem overwhelming, but once you understand what each part does and practice using them together, it becomes second nature.",
        "This is like learning a new language - you start with basic vocabulary (core concepts), learn grammar rules (syntax and patterns), and then practice combining words into sentences (implementing solutions).",
        "Understanding this documentation is like following a detailed map. It shows you where you are (current state), where you want to go (desired outcome), and the best routes to get there (implementation steps).",
    ],
    code_example: r#"// Example implementation based on the documentation
function implementFeature(config) {
  // Initialize with default settings
  const settings = {
    enabled: true,
    timeout: 5000,
    retries: 3,
    ...config
  };

  // Main implementation logic
  return {
    execute: async (data) => {
      let attempts = 0;

      while (attempts < settings.retries) {
        try {
          const result = await processWithTimeout(data, settings.timeout);
          return { success: true, data: result };
        } catch (error) {
          attempts++;
          if (attempts >= settings.retries) {
            throw error;
          }
          await delay(1000 * attempts); // Exponential backoff
        }
      }
    },

    configure: (newConfig) => {
      Object.assign(settings, newConfig);
    }
  };
}"#,
    use_cases: [
        "Implementing the specific functionality described in the documentation",
        "Solving common development challenges in your projects",
        "Building scalable and maintainable software solutions",
        "Following best practices for code organization and structure",
        "Creating robust error handling and edge case management",
    ],
    key_points: [
        "Read the documentation thoroughly before implementing",
        "Test your implementation with different inputs and edge cases",
        "Follow the recommended patterns and best practices",
        "Consider performance implications and optimization opportunities",
        "Keep your code clean, readable, and well-documented",
    ],
};
