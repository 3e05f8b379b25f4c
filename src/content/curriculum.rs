//! Fundamentals concepts, SOLID principles and the roadmap levels

use super::{CodeSample, Concept, Level, Principle, Quiz};
use crate::routes::Topic;

pub static CONCEPTS: [Concept; 5] = [
    Concept {
        id: "classes-objects",
        title: "Classes and Objects",
        description: "Learn about the building blocks of OOP - how classes define blueprints and objects are instances that bring those blueprints to life.",
        key_points: &[
            "A class declares state (fields) and behavior (methods).",
            "An object is one instance of a class with its own state.",
            "Constructors establish a valid initial state.",
        ],
        example: CodeSample {
            title: "Car",
            language: "typescript",
            code: "class Car {
  constructor(
    public make: string,
    public model: string,
    public year: number,
  ) {}

  drive() {
    console.log(`Driving ${this.year} ${this.make} ${this.model}`);
  }
}

const myCar = new Car('Toyota', 'Corolla', 2022);
myCar.drive(); // Driving 2022 Toyota Corolla",
        },
        quiz: Quiz {
            question: "What is the relationship between a class and an object?",
            options: &[
                "A class is an instance of an object",
                "An object is an instance of a class",
                "They are two names for the same thing",
                "A class can only ever create one object",
            ],
            correct: 1,
            explanation: "The class is the blueprint; each object created from it is an instance with its own state.",
        },
    },
    Concept {
        id: "encapsulation",
        title: "Encapsulation",
        description: "Discover how encapsulation bundles data with the methods that operate on that data, controlling access to the internal state of objects.",
        key_points: &[
            "Keep fields private and expose intent-revealing methods.",
            "Validate state changes in one place.",
            "Callers depend on behavior, not on representation.",
        ],
        example: CodeSample {
            title: "BankAccount",
            language: "typescript",
            code: "class BankAccount {
  private _balance = 0;

  deposit(amount: number): void {
    if (amount > 0) {
      this._balance += amount;
      console.log(`Deposited ${amount}. New balance: ${this._balance}`);
    }
  }

  withdraw(amount: number): boolean {
    if (amount <= this._balance) {
      this._balance -= amount;
      return true;
    }
    console.log('Insufficient funds');
    return false;
  }

  get balance(): number {
    return this._balance;
  }
}",
        },
        quiz: Quiz {
            question: "Which access modifier hides a field from code outside the class?",
            options: &["public", "private", "static", "readonly"],
            correct: 1,
            explanation: "private members are only reachable from inside the declaring class.",
        },
    },
    Concept {
        id: "inheritance",
        title: "Inheritance",
        description: "Explore how classes can inherit properties and methods from parent classes, promoting code reuse and establishing a hierarchy.",
        key_points: &[
            "A subclass reuses and extends its parent's behavior.",
            "Overriding replaces a parent method for the subclass.",
            "Prefer shallow hierarchies; favor composition when in doubt.",
        ],
        example: CodeSample {
            title: "Animal",
            language: "typescript",
            code: "class Animal {
  constructor(public name: string) {}

  speak(): void {
    console.log(`${this.name} makes a sound`);
  }
}

class Dog extends Animal {
  speak(): void {
    console.log(`${this.name} barks`);
  }
}

new Dog('Rex').speak(); // Rex barks",
        },
        quiz: Quiz {
            question: "Which keyword calls the parent class constructor in TypeScript?",
            options: &["this", "parent", "super", "base"],
            correct: 2,
            explanation: "super(...) invokes the parent constructor and must run before `this` is used.",
        },
    },
    Concept {
        id: "polymorphism",
        title: "Polymorphism",
        description: "Understand how polymorphism allows objects to be treated as instances of their parent class, enabling flexible and reusable code.",
        key_points: &[
            "Code written against an interface works with every implementation.",
            "The concrete method is chosen at runtime.",
            "New types plug in without changing the calling code.",
        ],
        example: CodeSample {
            title: "Shapes",
            language: "typescript",
            code: "interface Shape {
  calculateArea(): number;
}

class Circle implements Shape {
  constructor(private radius: number) {}
  calculateArea() { return Math.PI * this.radius ** 2; }
}

class Rectangle implements Shape {
  constructor(private w: number, private h: number) {}
  calculateArea() { return this.w * this.h; }
}

function printArea(shape: Shape) {
  console.log(`Area: ${shape.calculateArea().toFixed(2)}`);
}

printArea(new Circle(5));       // Area: 78.54
printArea(new Rectangle(4, 6)); // Area: 24.00",
        },
        quiz: Quiz {
            question: "What makes printArea(shape: Shape) polymorphic?",
            options: &[
                "It uses a template string",
                "It accepts any object implementing Shape",
                "It is declared outside a class",
                "It returns nothing",
            ],
            correct: 1,
            explanation: "The function is written against the Shape interface, so any implementation can be passed in.",
        },
    },
    Concept {
        id: "abstraction",
        title: "Abstraction",
        description: "Learn how abstraction simplifies complex systems by modeling classes based on essential properties and behaviors.",
        key_points: &[
            "Expose what an object does, hide how it does it.",
            "Abstract classes share a skeleton and leave steps to subclasses.",
            "Interfaces describe capabilities without implementation.",
        ],
        example: CodeSample {
            title: "Database",
            language: "typescript",
            code: "abstract class Database {
  abstract connect(): void;
  abstract query(sql: string): unknown[];
  abstract close(): void;

  executeQuery(sql: string): unknown[] {
    this.connect();
    const result = this.query(sql);
    this.close();
    return result;
  }
}

class MySQLDatabase extends Database {
  connect() { console.log('Connected to MySQL database'); }
  query(sql: string) {
    console.log(`Executing MySQL query: ${sql}`);
    return [{ id: 1 }];
  }
  close() { console.log('Closed MySQL connection'); }
}",
        },
        quiz: Quiz {
            question: "Can you instantiate an abstract class directly?",
            options: &[
                "Yes, always",
                "Only if it has a constructor",
                "No, only concrete subclasses can be instantiated",
                "Only inside the same file",
            ],
            correct: 2,
            explanation: "Abstract classes describe a partial implementation; a concrete subclass must fill in the abstract members.",
        },
    },
];

/// Correct option of each concept's quiz, in concept order
pub fn quiz_answers() -> impl Iterator<Item = usize> {
    CONCEPTS.iter().map(|c| c.quiz.correct)
}

pub static PRINCIPLES: [Principle; 5] = [
    Principle {
        acronym: 'S',
        title: "Single Responsibility Principle",
        description: "A class should have only one reason to change, meaning it should have only one job or responsibility.",
        violation: CodeSample {
            title: "Bad: multiple responsibilities",
            language: "typescript",
            code: "class User {
  constructor(public name: string, public email: string) {}

  validateEmail(): boolean {
    return /^\\S+@\\S+\\.\\S+$/.test(this.email);
  }

  saveToDatabase(): void {
    console.log(`Saving user ${this.name} to database`);
  }

  sendWelcomeEmail(): void {
    console.log(`Sending welcome email to ${this.email}`);
  }
}",
        },
        fix: CodeSample {
            title: "Good: separated responsibilities",
            language: "typescript",
            code: "class User {
  constructor(public name: string, public email: string) {}
}

class UserValidator {
  validateEmail(email: string): boolean {
    return /^\\S+@\\S+\\.\\S+$/.test(email);
  }
}

class UserRepository {
  save(user: User): void {
    console.log(`Saving user ${user.name} to database`);
  }
}

class EmailService {
  sendWelcomeEmail(email: string): void {
    console.log(`Sending welcome email to ${email}`);
  }
}",
        },
    },
    Principle {
        acronym: 'O',
        title: "Open/Closed Principle",
        description: "Software entities should be open for extension but closed for modification. You should be able to add new functionality without changing existing code.",
        violation: CodeSample {
            title: "Bad: type switch",
            language: "typescript",
            code: "class AreaCalculator {
  calculateArea(shape: Rectangle | Circle): number {
    if (shape instanceof Rectangle) {
      return shape.width * shape.height;
    } else if (shape instanceof Circle) {
      return Math.PI * shape.radius * shape.radius;
    }
    return 0;
  }
}",
        },
        fix: CodeSample {
            title: "Good: extend through an interface",
            language: "typescript",
            code: "interface Shape {
  calculateArea(): number;
}

class Rectangle implements Shape {
  constructor(private width: number, private height: number) {}
  calculateArea() { return this.width * this.height; }
}

class Triangle implements Shape {
  constructor(private base: number, private height: number) {}
  calculateArea() { return (this.base * this.height) / 2; }
}",
        },
    },
    Principle {
        acronym: 'L',
        title: "Liskov Substitution Principle",
        description: "Subtypes must be substitutable for their base types without altering the correctness of the program.",
        violation: CodeSample {
            title: "Bad: subtype breaks the contract",
            language: "typescript",
            code: "class Bird {
  fly(): void { console.log('Flying...'); }
}

class Ostrich extends Bird {
  fly(): void { throw new Error('Ostriches cannot fly!'); }
}

function makeBirdFly(bird: Bird) {
  bird.fly(); // throws for Ostrich
}",
        },
        fix: CodeSample {
            title: "Good: model what every bird can do",
            language: "typescript",
            code: "class Bird {
  move(): void { console.log('Moving...'); }
}

class FlyingBird extends Bird {
  move(): void { console.log('Flying...'); }
}

class FlightlessBird extends Bird {
  move(): void { console.log('Walking...'); }
}

function makeBirdMove(bird: Bird) {
  bird.move(); // works for all birds
}",
        },
    },
    Principle {
        acronym: 'I',
        title: "Interface Segregation Principle",
        description: "Clients should not be forced to depend on interfaces they do not use. Many client-specific interfaces are better than one general-purpose interface.",
        violation: CodeSample {
            title: "Bad: fat interface",
            language: "typescript",
            code: "interface Worker {
  work(): void;
  eat(): void;
  sleep(): void;
}

class Robot implements Worker {
  work() { console.log('Working'); }
  eat() { throw new Error('Robots do not eat'); }
  sleep() { throw new Error('Robots do not sleep'); }
}",
        },
        fix: CodeSample {
            title: "Good: segregated interfaces",
            language: "typescript",
            code: "interface Workable { work(): void; }
interface Eatable { eat(): void; }
interface Sleepable { sleep(): void; }

class Human implements Workable, Eatable, Sleepable {
  work() { console.log('Working'); }
  eat() { console.log('Eating'); }
  sleep() { console.log('Sleeping'); }
}

class Robot implements Workable {
  work() { console.log('Working'); }
}",
        },
    },
    Principle {
        acronym: 'D',
        title: "Dependency Inversion Principle",
        description: "High-level modules should not depend on low-level modules. Both should depend on abstractions. Abstractions should not depend on details. Details should depend on abstractions.",
        violation: CodeSample {
            title: "Bad: concrete dependency",
            language: "typescript",
            code: "class UserRepository {
  private database = new MySQLDatabase(); // direct dependency

  getUsers() {
    this.database.connect();
    return this.database.query('SELECT * FROM users');
  }
}",
        },
        fix: CodeSample {
            title: "Good: depend on an abstraction",
            language: "typescript",
            code: "interface Database {
  connect(): void;
  query(sql: string): unknown[];
}

class UserRepository {
  constructor(private database: Database) {} // injected

  getUsers() {
    this.database.connect();
    return this.database.query('SELECT * FROM users');
  }
}",
        },
    },
];

/// A titled group of bullet items inside a roadmap level
#[derive(Debug, Clone, Copy)]
pub struct RoadmapSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// One numbered step of the roadmap
#[derive(Debug, Clone, Copy)]
pub struct RoadmapLevel {
    pub step: u8,
    pub title: &'static str,
    pub level: Level,
    pub sections: &'static [RoadmapSection],
    /// Topic pages that belong to this step
    pub topics: &'static [Topic],
}

pub static ROADMAP: [RoadmapLevel; 3] = [
    RoadmapLevel {
        step: 1,
        title: "Foundations of Low-Level Design",
        level: Level::Beginner,
        sections: &[
            RoadmapSection {
                title: "Object-Oriented Programming Basics",
                items: &[
                    "Classes and Objects",
                    "Inheritance and Polymorphism",
                    "Encapsulation and Abstraction",
                    "Interfaces and Abstract Classes",
                ],
            },
            RoadmapSection {
                title: "Basic Design Principles",
                items: &[
                    "DRY (Don't Repeat Yourself)",
                    "KISS (Keep It Simple, Stupid)",
                    "YAGNI (You Aren't Gonna Need It)",
                    "Single Responsibility Principle",
                ],
            },
        ],
        topics: &[Topic::OopFundamentals],
    },
    RoadmapLevel {
        step: 2,
        title: "Intermediate Concepts",
        level: Level::Intermediate,
        sections: &[
            RoadmapSection {
                title: "SOLID Principles",
                items: &[
                    "Single Responsibility Principle",
                    "Open/Closed Principle",
                    "Liskov Substitution Principle",
                    "Interface Segregation Principle",
                    "Dependency Inversion Principle",
                ],
            },
            RoadmapSection {
                title: "Common Design Patterns",
                items: &[
                    "Creational Patterns: Factory, Singleton, Builder",
                    "Structural Patterns: Adapter, Facade, Composite",
                    "Behavioral Patterns: Observer, Strategy, Command",
                ],
            },
        ],
        topics: &[Topic::SolidPrinciples, Topic::DesignPatterns],
    },
    RoadmapLevel {
        step: 3,
        title: "Advanced Topics",
        level: Level::Advanced,
        sections: &[
            RoadmapSection {
                title: "Advanced Design Patterns",
                items: &[
                    "Architectural Patterns: MVC, MVVM, Hexagonal",
                    "Concurrency Patterns",
                    "Enterprise Integration Patterns",
                ],
            },
            RoadmapSection {
                title: "System Design Considerations",
                items: &[
                    "Performance Optimization",
                    "Scalability Planning",
                    "Security By Design",
                    "Testability and Maintainability",
                ],
            },
        ],
        topics: &[],
    },
];
